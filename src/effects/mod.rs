//! Browser-independent state behind each visual effect. The yew layer in
//! `frontend` feeds these from DOM events and renders what they return.

pub mod contact;
pub mod glow;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod typewriter;
