mod resource;
pub use self::resource::*;

mod resource_type;
pub use self::resource_type::*;
