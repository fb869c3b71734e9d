pub mod html;
pub mod markdown;
pub mod template;
pub mod view;
