pub use checkbox::MaterialCheckbox;
pub use switch::MaterialSwitch;

mod checkbox;
mod switch;
