mod copy_button;
mod external_link;
mod section;

pub use copy_button::CopyButton;
pub use external_link::ExternalLink;
pub use section::Section;
