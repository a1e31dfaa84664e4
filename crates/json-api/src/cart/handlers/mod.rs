//! Cart Handlers

pub(crate) mod add;
pub(crate) mod clear;
pub(crate) mod remove;
pub(crate) mod show;
pub(crate) mod update;
