mod plot;
mod svg;
mod table;
mod view;

pub use plot::{
    plot_dimensions, truncate_label, AxisDomain, PlotLayout, MAX_PLOT_WIDTH, MIN_PLOT_WIDTH,
};
pub use svg::{escape_xml, render_svg};
pub use table::render_table;
pub use view::{ViewState, SETUP_GUIDANCE};
