//! 页面 - 极简 HTML

pub mod handler;
