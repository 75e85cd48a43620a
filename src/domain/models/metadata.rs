//! Metadata tables used by the administration tool for its own UI and
//! user-level state (bookmarks, relations, history, ...).
//!
//! Only the shared prefix is configurable. Every physical table name is
//! `prefix + suffix`, so all names share one prefix by construction.

use std::collections::BTreeMap;
use std::fmt;

/// Default prefix shared by every metadata table.
pub const DEFAULT_TABLE_PREFIX: &str = "pma__";

/// Default name of the metadata database (`pmadb`).
pub const DEFAULT_METADATA_DATABASE: &str = "phpmyadmin";

/// Logical feature backed by a metadata table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetadataFeature {
    Bookmarks,
    Relation,
    TableInfo,
    TableCoords,
    PdfPages,
    ColumnInfo,
    History,
    Recent,
    Favorite,
    TableUiprefs,
    Tracking,
    Userconfig,
    DisplayColumns,
    PrimeKeys,
    SavedSearches,
    CentralColumns,
    ExportTemplates,
    NavigationHiding,
    DesignerSettings,
    UserGroups,
}

impl MetadataFeature {
    /// All features, in the order the tool documents them.
    pub const ALL: [Self; 20] = [
        Self::Bookmarks,
        Self::Relation,
        Self::TableInfo,
        Self::TableCoords,
        Self::PdfPages,
        Self::ColumnInfo,
        Self::History,
        Self::Recent,
        Self::Favorite,
        Self::TableUiprefs,
        Self::Tracking,
        Self::Userconfig,
        Self::DisplayColumns,
        Self::PrimeKeys,
        Self::SavedSearches,
        Self::CentralColumns,
        Self::ExportTemplates,
        Self::NavigationHiding,
        Self::DesignerSettings,
        Self::UserGroups,
    ];

    /// Server setting key the tool reads this table name from.
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Bookmarks => "bookmarktable",
            Self::Relation => "relation",
            Self::TableInfo => "table_info",
            Self::TableCoords => "table_coords",
            Self::PdfPages => "pdf_pages",
            Self::ColumnInfo => "column_info",
            Self::History => "history",
            Self::Recent => "recent",
            Self::Favorite => "favorite",
            Self::TableUiprefs => "table_uiprefs",
            Self::Tracking => "tracking",
            Self::Userconfig => "userconfig",
            Self::DisplayColumns => "pmadisplaycolumns",
            Self::PrimeKeys => "primekeys",
            Self::SavedSearches => "savedsearches",
            Self::CentralColumns => "central_columns",
            Self::ExportTemplates => "export_templates",
            Self::NavigationHiding => "navigationhiding",
            Self::DesignerSettings => "designer_settings",
            Self::UserGroups => "usergroups",
        }
    }

    /// Physical table name without the prefix. Only bookmarks differ
    /// from their setting key.
    pub const fn table_suffix(self) -> &'static str {
        match self {
            Self::Bookmarks => "bookmarks",
            other => other.config_key(),
        }
    }
}

impl fmt::Display for MetadataFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Resolved metadata database and table names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTables {
    database: String,
    prefix: String,
    tables: BTreeMap<MetadataFeature, String>,
}

impl MetadataTables {
    /// Resolve every feature's table name under `prefix`.
    pub fn new(database: impl Into<String>, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let tables = MetadataFeature::ALL
            .iter()
            .map(|&feature| (feature, format!("{prefix}{}", feature.table_suffix())))
            .collect();

        Self {
            database: database.into(),
            prefix,
            tables,
        }
    }

    /// Name of the metadata database (`pmadb`).
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Prefix shared by all table names.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Physical table name for a feature.
    pub fn table(&self, feature: MetadataFeature) -> &str {
        // Every feature is inserted in `new`.
        self.tables.get(&feature).map_or("", String::as_str)
    }

    /// Features and their table names, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (MetadataFeature, &str)> + '_ {
        self.tables.iter().map(|(feature, name)| (*feature, name.as_str()))
    }

    /// Number of resolved tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for MetadataTables {
    fn default() -> Self {
        Self::new(DEFAULT_METADATA_DATABASE, DEFAULT_TABLE_PREFIX)
    }
}
