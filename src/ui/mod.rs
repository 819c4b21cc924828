/// Widgets: input controls (`panels`) and the chart area (`plot`).

pub mod panels;
pub mod plot;
