//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own form/render details while reading shared configuration
//! and state from Leptos context providers.

pub mod login_form;
