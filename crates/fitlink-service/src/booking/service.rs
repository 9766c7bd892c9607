//! Booking operations for members and for the booked trainer.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use fitlink_core::config::BookingConfig;
use fitlink_core::error::AppError;
use fitlink_core::traits::Lifecycle;
use fitlink_database::repositories::{BookingRepository, GymRepository, InstructorRepository};
use fitlink_entity::booking::{Booking, BookingStatus, CreateBooking};
use fitlink_entity::notification::{CreateNotification, NotificationType};

use crate::context::RequestContext;
use crate::notification::NotificationService;

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub instructor_id: Uuid,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
}

/// Status changes a trainer applies to their own bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerAction {
    Confirm,
    Complete,
    NoShow,
}

impl TrainerAction {
    pub fn target(&self) -> BookingStatus {
        match self {
            Self::Confirm => BookingStatus::Confirmed,
            Self::Complete => BookingStatus::Completed,
            Self::NoShow => BookingStatus::NoShow,
        }
    }

    fn notification(&self, booking: &Booking) -> Option<CreateNotification> {
        let (title, body) = match self {
            Self::Confirm => (
                "Booking confirmed",
                format!(
                    "Your session on {} at {} has been confirmed.",
                    booking.booking_date,
                    booking.start_time.format("%H:%M")
                ),
            ),
            Self::Complete => (
                "Session completed",
                format!(
                    "Your session on {} has been marked as completed.",
                    booking.booking_date
                ),
            ),
            Self::NoShow => return None,
        };
        Some(
            CreateNotification::in_app(
                booking.user_id,
                NotificationType::InstructorBooking,
                title,
                body,
            )
            .with_data(json!({ "booking_id": booking.id })),
        )
    }
}

#[derive(Debug, Clone)]
pub struct BookingService {
    booking_repo: Arc<BookingRepository>,
    instructor_repo: Arc<InstructorRepository>,
    gym_repo: Arc<GymRepository>,
    notifications: Arc<NotificationService>,
    config: BookingConfig,
    currency: String,
}

impl BookingService {
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        instructor_repo: Arc<InstructorRepository>,
        gym_repo: Arc<GymRepository>,
        notifications: Arc<NotificationService>,
        config: BookingConfig,
        currency: String,
    ) -> Self {
        Self {
            booking_repo,
            instructor_repo,
            gym_repo,
            notifications,
            config,
            currency,
        }
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.list_by_user(ctx.user_id, status).await
    }

    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Booking, AppError> {
        self.booking_repo
            .find_by_id(id)
            .await?
            .filter(|b| b.user_id == ctx.user_id)
            .ok_or_else(|| AppError::not_found("Booking not found"))
    }

    /// Book a session. A taken slot surfaces as a 409 from the repository.
    pub async fn create(&self, ctx: &RequestContext, input: NewBooking) -> Result<Booking, AppError> {
        if input.booking_date < ctx.today() {
            return Err(AppError::field(
                "booking_date",
                "The booking date must be a date after or equal to today.",
            ));
        }
        let duration = CreateBooking::duration_between(input.start_time, input.end_time)
            .ok_or_else(|| {
                AppError::field("end_time", "The end time must be after the start time.")
            })?;
        if !self.config.allows_duration(duration) {
            let allowed: Vec<String> = self
                .config
                .session_durations
                .iter()
                .map(|m| m.to_string())
                .collect();
            return Err(AppError::field(
                "end_time",
                format!(
                    "Sessions must last one of: {} minutes.",
                    allowed.join(", ")
                ),
            ));
        }

        let instructor = self
            .instructor_repo
            .find_by_id(input.instructor_id)
            .await?
            .ok_or_else(|| AppError::not_found("Instructor not found"))?;
        if !instructor.is_bookable() {
            return Err(AppError::business_rule(
                "This instructor is not available for booking",
            ));
        }
        if self
            .gym_repo
            .find_visible_by_id(instructor.gym_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Gym not found"));
        }

        let booking = self
            .booking_repo
            .create(&CreateBooking {
                user_id: ctx.user_id,
                instructor_id: instructor.id,
                gym_id: instructor.gym_id,
                booking_date: input.booking_date,
                start_time: input.start_time,
                end_time: input.end_time,
                duration_minutes: duration,
                amount: CreateBooking::fee(instructor.hourly_rate, duration),
                currency: self.currency.clone(),
                notes: input.notes,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            user_id = %ctx.user_id,
            instructor_id = %instructor.id,
            date = %booking.booking_date,
            start = %booking.start_time,
            "Booking created"
        );
        Ok(booking)
    }

    pub async fn cancel(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        reason: Option<String>,
    ) -> Result<Booking, AppError> {
        let booking = self.get(ctx, id).await?;
        let status = booking.status.transition_to(BookingStatus::Cancelled)?;
        let cancelled = self
            .booking_repo
            .set_status(id, status, reason.as_deref())
            .await?;
        info!(booking_id = %id, user_id = %ctx.user_id, "Booking cancelled");
        Ok(cancelled)
    }

    /// Bookings against the calling trainer's instructor profile.
    pub async fn list_for_trainer(
        &self,
        ctx: &RequestContext,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, AppError> {
        let instructor = self.trainer_instructor(ctx).await?;
        self.booking_repo
            .list_by_instructor(instructor, status)
            .await
    }

    pub async fn trainer_action(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        action: TrainerAction,
    ) -> Result<Booking, AppError> {
        let instructor = self.trainer_instructor(ctx).await?;
        let booking = self
            .booking_repo
            .find_by_id(id)
            .await?
            .filter(|b| b.instructor_id == instructor)
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        let status = booking.status.transition_to(action.target())?;
        let updated = self.booking_repo.set_status(id, status, None).await?;
        info!(
            booking_id = %id,
            instructor_id = %instructor,
            from = %booking.status,
            to = %status,
            "Booking status changed by trainer"
        );

        if let Some(notification) = action.notification(&updated) {
            self.notifications.notify(notification).await;
        }
        Ok(updated)
    }

    async fn trainer_instructor(&self, ctx: &RequestContext) -> Result<Uuid, AppError> {
        self.instructor_repo
            .find_by_user(ctx.user_id)
            .await?
            .map(|i| i.id)
            .ok_or_else(|| AppError::not_found("Instructor profile not found"))
    }
}
