mod capabilities;
pub use capabilities::*;

mod post_processor;
pub use post_processor::*;

mod pre_processor;
pub use pre_processor::*;

mod processor;
pub use processor::*;
