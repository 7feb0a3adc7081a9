// ---------------------------------------------------------------------------
// Dashboard constants
// ---------------------------------------------------------------------------

/// Published survey data for data-related roles.
pub const DATA_URL: &str = "https://raw.githubusercontent.com/vqrca/dashboard_salarios_dados/refs/heads/main/dados-imersao-final.csv";

/// Icon shown at the top of the filter panel.
pub const SIDEBAR_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/2103/2103633.png";

/// Fixed settings of one dashboard session. There is no configuration file
/// and no command line; every session starts from these defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_url: String,
    pub sidebar_icon_url: String,
    /// Bin count of the salary histogram.
    pub histogram_bins: usize,
    /// How many roles the top-roles chart keeps.
    pub top_roles: usize,
    /// Role the geographic tab is restricted to.
    pub geo_role: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_url: DATA_URL.to_string(),
            sidebar_icon_url: SIDEBAR_ICON_URL.to_string(),
            histogram_bins: 40,
            top_roles: 10,
            geo_role: "Data Scientist".to_string(),
            window_size: [1400.0, 900.0],
            min_window_size: [800.0, 500.0],
        }
    }
}
