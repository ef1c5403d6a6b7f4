/// Static mapping of filename suffixes to Salesforce metadata types.
///
/// Lookup is first-match-wins over this exact ordering, so an entry whose
/// suffix shares a tail with another must appear before the more generic
/// one. Compound `-meta.xml` suffixes are listed next to the source suffix
/// they accompany.
pub const METADATA_SUFFIXES: &[(&str, &str)] = &[
    // Apex & Visualforce
    (".cls", "ApexClass"),
    (".cls-meta.xml", "ApexClass"),
    (".trigger", "ApexTrigger"),
    (".trigger-meta.xml", "ApexTrigger"),
    (".component", "ApexComponent"),
    (".component-meta.xml", "ApexComponent"),
    (".page", "VisualforcePage"),
    (".page-meta.xml", "VisualforcePage"),
    // Aura components
    (".cmp", "AuraComponent"),
    (".cmp-meta.xml", "AuraComponent"),
    (".evt", "AuraEvent"),
    (".evt-meta.xml", "AuraEvent"),
    (".app", "AuraApplication"),
    (".app-meta.xml", "AuraApplication"),
    (".design", "AuraDesign"),
    (".design-meta.xml", "AuraDesign"),
    // Lightning web components are identified by their -meta.xml file
    (".js-meta.xml", "LightningWebComponent"),
    // Objects and fields
    (".object-meta.xml", "CustomObject"),
    (".field-meta.xml", "CustomField"),
    // Other metadata types
    (".tab-meta.xml", "CustomTab"),
    (".layout-meta.xml", "Layout"),
    (".listView-meta.xml", "ListView"),
    (".webLink-meta.xml", "WebLink"),
    (".fieldSet-meta.xml", "FieldSet"),
    (".profile-meta.xml", "Profile"),
    (".permissionset-meta.xml", "PermissionSet"),
    (".resource-meta.xml", "StaticResource"),
    (".flow-meta.xml", "Flow"),
    (".flowDefinition-meta.xml", "FlowDefinition"),
    (".email-meta.xml", "EmailTemplate"),
    (".report-meta.xml", "Report"),
    (".dashboard-meta.xml", "Dashboard"),
    (".customSite-meta.xml", "CustomSite"),
    (".assignmentRules-meta.xml", "AssignmentRules"),
    (".escalationRules-meta.xml", "EscalationRules"),
    (".remoteSite-meta.xml", "RemoteSiteSetting"),
    (".certificate-meta.xml", "Certificate"),
    (".labels-meta.xml", "CustomLabels"),
    (".recordType-meta.xml", "RecordType"),
    (".compactLayout-meta.xml", "CompactLayout"),
    (".connectedApp-meta.xml", "ConnectedApp"),
    (".translation-meta.xml", "Translations"),
    (".site-meta.xml", "SiteDotCom"),
    (".networkBranding-meta.xml", "NetworkBranding"),
    (".territory2Rule-meta.xml", "Territory2Rule"),
    (".territory2Type-meta.xml", "Territory2Type"),
    (".customPermission-meta.xml", "CustomPermission"),
    (".quickAction-meta.xml", "QuickAction"),
];
