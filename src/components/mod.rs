// ABOUTME: UI components for the kiosk TUI - wizard screen, layout and help overlay

pub mod help;
pub mod kiosk;
pub mod layout;

pub use help::HelpComponent;
pub use kiosk::KioskComponent;
pub use layout::LayoutComponent;
