mod about;
mod features;
mod footer;
mod hero;
mod landing;
mod not_found;

pub use about::About;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use landing::Landing;
pub use not_found::NotFound;
