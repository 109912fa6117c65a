// Landing page sections

mod contact;
mod features;
mod footer;
mod hero;
mod nav;
mod product;

pub use contact::Contact;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use product::Product;
