//! Domain Services - Operations on creatures that sit above the port

pub mod creature_service;
