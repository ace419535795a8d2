pub mod codec;
pub mod error;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod player;
pub mod plot;

pub use error::{LocmapError, ParseError, PlayerError, PlotError};
pub use logging::formatter::LogFormat;
pub use logging::{init, init_default, init_from_args};
pub use models::{Designator, Entry, LocationMap, LocationRecord, Point};
pub use parsers::LocationsParser;
pub use plot::{PlotStyle, ScatterPlot};
