pub mod accordion;
pub mod carousel;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod widget;
