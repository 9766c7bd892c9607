//! # fitlink-entity
//!
//! Domain entity models for Fitlink. Every struct in this crate represents a
//! database table row or a domain value object. Row types derive
//! `sqlx::FromRow`; every status column is a closed enum, and every
//! lifecycle implements [`fitlink_core::traits::Lifecycle`].

#[macro_use]
mod macros;

pub mod booking;
pub mod chat;
pub mod device;
pub mod fraud;
pub mod gym;
pub mod gym_application;
pub mod instructor;
pub mod notification;
pub mod payment;
pub mod routine;
pub mod session;
pub mod subscription;
pub mod user;
