use std::time::Duration;

/// Fixed identities of the monitored enrollment page. The defaults match
/// the PeopleSoft shopping-cart layout; every value is configurable so a
/// campus skin change is a config edit, not a code change.
#[derive(Debug, Clone)]
pub struct PageModel {
    /// Id of the host page's main container element.
    pub container_id: String,
    /// Id of the frame injected into the container.
    pub frame_id: String,
    /// Exact visible text of the cart navigation link.
    pub cart_link_text: String,
    /// Class carried by the enrollment-step radio buttons.
    pub radio_class: String,
    /// Id of the "continue" control that re-submits the step.
    pub continue_id: String,
    /// Id of the cart table container.
    pub table_id: String,
    /// Class of the inner grid holding the item rows.
    pub grid_class: String,
    /// Column index of the item name cell.
    pub name_cell: usize,
    /// Column index of the cell whose image alt text carries the status.
    pub status_cell: usize,
}

impl Default for PageModel {
    fn default() -> Self {
        Self {
            container_id: "PT_MAIN".to_string(),
            frame_id: "main_target_win0".to_string(),
            cart_link_text: "Shopping Cart".to_string(),
            radio_class: "PSRADIOBUTTON".to_string(),
            continue_id: "DERIVED_SSS_SCT_SSR_PB_GO".to_string(),
            table_id: "SSR_REGFORM_VW$scroll$0".to_string(),
            grid_class: "PSLEVEL1GRID".to_string(),
            name_cell: 1,
            status_cell: 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigateSettings {
    /// Pause after each click before the frame is safe to re-read. An
    /// empirical value tied to the page's responsiveness, not to any
    /// correctness condition, so it stays configurable.
    pub settle_delay: Duration,
}

impl Default for NavigateSettings {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_secs(1),
        }
    }
}
