//! HTTP request handlers organized by domain.

pub mod admin;
pub mod application;
pub mod auth;
pub mod booking;
pub mod chat;
pub mod dashboard;
pub mod fraud;
pub mod gym;
pub mod health;
pub mod instructor;
pub mod notification;
pub mod payment;
pub mod routine;
pub mod subscription;
