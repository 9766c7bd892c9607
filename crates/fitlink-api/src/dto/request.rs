//! Request DTOs with validation.
//!
//! Each body type validates its own shape with `validator` and converts
//! into the service input it feeds. Ownership fields (`owner_id`,
//! `user_id`, `sender_id`) are filled in by the services from the caller.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use fitlink_core::error::AppError;
use fitlink_database::repositories::{FraudReportFilter, NotificationFilter, RoutineFilter};
use fitlink_entity::booking::BookingStatus;
use fitlink_entity::chat::{ChatType, CreateMessage, MessageType};
use fitlink_entity::device::{Platform, RegisterDevice};
use fitlink_entity::fraud::{FraudStatus, ReportType, ReportableKind, ReportableRef, Severity};
use fitlink_entity::gym::{CreateGym, GymStatus, UpdateGym};
use fitlink_entity::gym_application::{ApplicationStatus, CreateGymApplication};
use fitlink_entity::instructor::{CreateInstructor, InstructorStatus, UpdateInstructor};
use fitlink_entity::notification::{NotificationStatus, NotificationType};
use fitlink_entity::payment::{PayableKind, PayableRef, PaymentMethod, PaymentStatus};
use fitlink_entity::routine::{BodyRegion, CreateRoutine, Difficulty, Weekday};
use fitlink_entity::subscription::{PlanType, SubscriptionStatus};
use fitlink_entity::user::{Gender, UpdateProfile, UserRole};
use fitlink_service::auth::{LoginInput, RegisterInput};
use fitlink_service::booking::NewBooking;
use fitlink_service::chat::NewChat;
use fitlink_service::fraud::NewFraudReport;
use fitlink_service::gym::DiscoveryQuery;
use fitlink_service::instructor::TrainerProfileUpdate;
use fitlink_service::payment::StatusUpdate;
use fitlink_service::subscription::NewSubscription;

/// Accepts `HH:MM` or `HH:MM:SS`.
fn parse_time(field: &str, raw: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
        .map_err(|_| {
            AppError::field(
                field,
                format!("The {} must be a time in HH:MM format.", field.replace('_', " ")),
            )
        })
}

// ── Auth ───────────────────────────────────────────────────────

/// Registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "The name field is required."))]
    pub name: String,
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,
    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
    pub password_confirmation: String,
    /// `member`, `trainer` or `gym_owner`. Defaults to `member`.
    pub role: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
}

impl RegisterRequest {
    pub fn into_input(self) -> Result<RegisterInput, AppError> {
        let role = match self.role.as_deref() {
            Some(raw) => raw.parse::<UserRole>()?,
            None => UserRole::Member,
        };
        Ok(RegisterInput {
            name: self.name.trim().to_string(),
            email: self.email,
            password: self.password,
            password_confirmation: self.password_confirmation,
            role,
            phone: self.phone,
            location: self.location,
        })
    }
}

/// Login body. A device token, when present, is bound to the user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,
    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
    pub device_token: Option<String>,
    pub platform: Option<Platform>,
    pub device_id: Option<String>,
    pub device_model: Option<String>,
    pub os_version: Option<String>,
    pub app_version: Option<String>,
}

impl LoginRequest {
    pub fn into_input(self) -> Result<LoginInput, AppError> {
        let device = match (self.device_token, self.platform) {
            (Some(token), Some(platform)) => Some(RegisterDevice {
                user_id: Uuid::nil(),
                device_token: token,
                platform,
                device_id: self.device_id,
                device_model: self.device_model,
                os_version: self.os_version,
                app_version: self.app_version,
            }),
            (Some(_), None) => {
                return Err(AppError::field(
                    "platform",
                    "The platform field is required when device token is present.",
                ));
            }
            _ => None,
        };
        Ok(LoginInput {
            email: self.email,
            password: self.password,
            device,
        })
    }
}

/// Profile update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(url(message = "The profile picture must be a valid URL."))]
    pub profile_picture: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    #[validate(length(max = 1000, message = "The bio may not be greater than 1000 characters."))]
    pub bio: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfile {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            phone: req.phone,
            location: req.location,
            profile_picture: req.profile_picture,
            date_of_birth: req.date_of_birth,
            gender: req.gender,
            bio: req.bio,
        }
    }
}

/// Password change body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "The current password field is required."))]
    pub current_password: String,
    #[validate(length(min = 1, message = "The new password field is required."))]
    pub new_password: String,
    pub new_password_confirmation: String,
}

/// Push token registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeviceTokenRequest {
    #[validate(length(min = 1, max = 512, message = "The device token field is required."))]
    pub device_token: String,
    pub platform: Platform,
    pub device_id: Option<String>,
    pub device_model: Option<String>,
    pub os_version: Option<String>,
    pub app_version: Option<String>,
}

impl From<DeviceTokenRequest> for RegisterDevice {
    fn from(req: DeviceTokenRequest) -> Self {
        Self {
            user_id: Uuid::nil(),
            device_token: req.device_token,
            platform: req.platform,
            device_id: req.device_id,
            device_model: req.device_model,
            os_version: req.os_version,
            app_version: req.app_version,
        }
    }
}

// ── Gyms ───────────────────────────────────────────────────────

/// Gym registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateGymRequest {
    #[validate(length(min = 1, max = 255, message = "The name field is required."))]
    pub name: String,
    pub description: Option<String>,
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 20, message = "The phone field is required."))]
    pub phone: String,
    #[validate(url(message = "The website must be a valid URL."))]
    pub website: Option<String>,
    pub logo: Option<String>,
    #[validate(length(min = 1, message = "The address field is required."))]
    pub address: String,
    #[validate(length(min = 1, max = 100, message = "The city field is required."))]
    pub city: String,
    #[validate(length(min = 1, max = 100, message = "The state field is required."))]
    pub state: String,
    #[validate(length(min = 1, max = 100, message = "The country field is required."))]
    pub country: String,
    #[validate(length(max = 20))]
    pub postal_code: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "The latitude must be between -90 and 90."))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "The longitude must be between -180 and 180."))]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub operating_hours: Option<Value>,
}

impl From<CreateGymRequest> for CreateGym {
    fn from(req: CreateGymRequest) -> Self {
        Self {
            owner_id: Uuid::nil(),
            name: req.name,
            description: req.description,
            email: req.email,
            phone: req.phone,
            website: req.website,
            logo: req.logo,
            address: req.address,
            city: req.city,
            state: req.state,
            country: req.country,
            postal_code: req.postal_code,
            latitude: req.latitude,
            longitude: req.longitude,
            images: req.images,
            amenities: req.amenities,
            operating_hours: req.operating_hours,
        }
    }
}

/// Gym update body. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateGymRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,
    #[validate(url(message = "The website must be a valid URL."))]
    pub website: Option<String>,
    pub logo: Option<String>,
    #[validate(length(min = 1))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub state: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,
    #[validate(length(max = 20))]
    pub postal_code: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "The latitude must be between -90 and 90."))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "The longitude must be between -180 and 180."))]
    pub longitude: Option<f64>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub operating_hours: Option<Value>,
}

impl From<UpdateGymRequest> for UpdateGym {
    fn from(req: UpdateGymRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            email: req.email,
            phone: req.phone,
            website: req.website,
            logo: req.logo,
            address: req.address,
            city: req.city,
            state: req.state,
            country: req.country,
            postal_code: req.postal_code,
            latitude: req.latitude,
            longitude: req.longitude,
            images: req.images,
            amenities: req.amenities,
            operating_hours: req.operating_hours,
        }
    }
}

/// Public listing query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GymSearchParams {
    pub city: Option<String>,
    pub amenities: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl From<GymSearchParams> for DiscoveryQuery {
    fn from(params: GymSearchParams) -> Self {
        Self {
            city: params.city,
            amenities: params.amenities,
            search: params.search,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
            latitude: params.latitude,
            longitude: params.longitude,
            page: params.page,
            per_page: params.per_page,
        }
    }
}

/// Admin moderation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GymStatusRequest {
    pub status: GymStatus,
}

/// Admin verification body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyGymRequest {
    #[serde(default = "default_true")]
    pub is_verified: bool,
}

impl Default for VerifyGymRequest {
    fn default() -> Self {
        Self { is_verified: true }
    }
}

fn default_true() -> bool {
    true
}

// ── Instructors ────────────────────────────────────────────────

/// Instructor creation body. The gym is always the caller's own.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInstructorRequest {
    pub user_id: Option<Uuid>,
    #[validate(length(min = 1, max = 255, message = "The name field is required."))]
    pub name: String,
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    #[validate(length(max = 255))]
    pub specialization: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 60))]
    pub years_experience: i32,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub profile_picture: Option<String>,
    /// Falls back to the configured default rate.
    pub hourly_rate: Option<Decimal>,
    pub availability_schedule: Option<Value>,
}

impl CreateInstructorRequest {
    pub fn into_create(self, default_hourly_rate: Decimal) -> Result<CreateInstructor, AppError> {
        let hourly_rate = self.hourly_rate.unwrap_or(default_hourly_rate);
        if hourly_rate.is_sign_negative() {
            return Err(AppError::field(
                "hourly_rate",
                "The hourly rate must be at least 0.",
            ));
        }
        Ok(CreateInstructor {
            gym_id: Uuid::nil(),
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            bio: self.bio,
            specialization: self.specialization,
            years_experience: self.years_experience,
            certifications: self.certifications,
            profile_picture: self.profile_picture,
            hourly_rate,
            availability_schedule: self.availability_schedule,
        })
    }
}

/// Instructor update body (gym owner).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateInstructorRequest {
    pub user_id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    #[validate(length(max = 255))]
    pub specialization: Option<String>,
    #[validate(range(min = 0, max = 60))]
    pub years_experience: Option<i32>,
    pub certifications: Option<Vec<String>>,
    pub profile_picture: Option<String>,
    pub hourly_rate: Option<Decimal>,
    pub availability_schedule: Option<Value>,
    pub is_available: Option<bool>,
    pub status: Option<InstructorStatus>,
}

impl From<UpdateInstructorRequest> for UpdateInstructor {
    fn from(req: UpdateInstructorRequest) -> Self {
        Self {
            user_id: req.user_id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            bio: req.bio,
            specialization: req.specialization,
            years_experience: req.years_experience,
            certifications: req.certifications,
            profile_picture: req.profile_picture,
            hourly_rate: req.hourly_rate,
            availability_schedule: req.availability_schedule,
            is_available: req.is_available,
            status: req.status,
        }
    }
}

/// A trainer editing their own instructor profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TrainerProfileRequest {
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    #[validate(length(max = 255))]
    pub specialization: Option<String>,
    pub availability_schedule: Option<Value>,
    pub is_available: Option<bool>,
    pub hourly_rate: Option<Decimal>,
}

impl From<TrainerProfileRequest> for TrainerProfileUpdate {
    fn from(req: TrainerProfileRequest) -> Self {
        Self {
            bio: req.bio,
            specialization: req.specialization,
            availability_schedule: req.availability_schedule,
            is_available: req.is_available,
            hourly_rate: req.hourly_rate,
        }
    }
}

// ── Subscriptions ──────────────────────────────────────────────

/// Subscribe body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubscribeRequest {
    pub gym_id: Uuid,
    pub plan_type: PlanType,
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub auto_renew: bool,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl From<SubscribeRequest> for NewSubscription {
    fn from(req: SubscribeRequest) -> Self {
        Self {
            gym_id: req.gym_id,
            plan_type: req.plan_type,
            start_date: req.start_date,
            auto_renew: req.auto_renew,
            notes: req.notes,
        }
    }
}

/// Renewal body; omitting `plan_type` keeps the current plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RenewRequest {
    pub plan_type: Option<PlanType>,
}

/// `?status=` filter for subscription lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionQuery {
    pub status: Option<SubscriptionStatus>,
}

// ── Bookings ───────────────────────────────────────────────────

/// Booking body. Times are `HH:MM`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub instructor_id: Uuid,
    pub booking_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    pub fn into_input(self) -> Result<NewBooking, AppError> {
        Ok(NewBooking {
            instructor_id: self.instructor_id,
            booking_date: self.booking_date,
            start_time: parse_time("start_time", &self.start_time)?,
            end_time: parse_time("end_time", &self.end_time)?,
            notes: self.notes,
        })
    }
}

/// Optional cancellation reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CancelBookingRequest {
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

/// `?status=` filter for booking lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingQuery {
    pub status: Option<BookingStatus>,
}

// ── Payments ───────────────────────────────────────────────────

/// Payment initiation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    pub payable_type: PayableKind,
    pub payable_id: Uuid,
    pub payment_method: PaymentMethod,
}

impl CreatePaymentRequest {
    pub fn payable(&self) -> PayableRef {
        PayableRef {
            kind: self.payable_type,
            id: self.payable_id,
        }
    }
}

/// Admin reconciliation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentStatusRequest {
    pub status: PaymentStatus,
    #[validate(length(max = 255))]
    pub transaction_id: Option<String>,
    #[validate(length(max = 1000))]
    pub failure_reason: Option<String>,
}

impl From<PaymentStatusRequest> for StatusUpdate {
    fn from(req: PaymentStatusRequest) -> Self {
        Self {
            status: req.status,
            transaction_id: req.transaction_id,
            failure_reason: req.failure_reason,
        }
    }
}

/// `?status=` filter for payment lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentQuery {
    pub status: Option<PaymentStatus>,
}

// ── Chat ───────────────────────────────────────────────────────

/// New conversation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateChatRequest {
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    #[validate(length(max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "The participant ids field is required."))]
    pub participant_ids: Vec<Uuid>,
}

impl From<CreateChatRequest> for NewChat {
    fn from(req: CreateChatRequest) -> Self {
        Self {
            chat_type: req.chat_type,
            title: req.title,
            participant_ids: req.participant_ids,
        }
    }
}

/// Message body. `content` is required for text, `file_url` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub message_type: Option<MessageType>,
    #[validate(length(max = 5000))]
    pub content: Option<String>,
    #[validate(url(message = "The file url must be a valid URL."))]
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    #[validate(range(min = 0))]
    pub file_size: Option<i64>,
    pub metadata: Option<Value>,
}

impl SendMessageRequest {
    pub fn into_message(self, chat_id: Uuid) -> CreateMessage {
        CreateMessage {
            chat_id,
            sender_id: Uuid::nil(),
            message_type: self.message_type.unwrap_or(MessageType::Text),
            content: self.content,
            file_url: self.file_url,
            file_name: self.file_name,
            file_size: self.file_size,
            metadata: self.metadata,
        }
    }
}

// ── Notifications ──────────────────────────────────────────────

/// Notification list filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationQuery {
    pub status: Option<NotificationStatus>,
    #[serde(rename = "type")]
    pub notification_type: Option<NotificationType>,
}

impl From<NotificationQuery> for NotificationFilter {
    fn from(query: NotificationQuery) -> Self {
        Self {
            status: query.status,
            notification_type: query.notification_type,
        }
    }
}

// ── Gym applications ───────────────────────────────────────────

/// Application body, used for both submission and resubmission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GymApplicationRequest {
    #[validate(length(min = 1, max = 255, message = "The business name field is required."))]
    pub business_name: String,
    pub business_description: Option<String>,
    #[validate(length(min = 1, message = "The business address field is required."))]
    pub business_address: String,
    #[validate(length(min = 1, max = 100, message = "The business city field is required."))]
    pub business_city: String,
    #[validate(length(min = 1, max = 100, message = "The business state field is required."))]
    pub business_state: String,
    #[validate(length(min = 1, max = 100, message = "The business country field is required."))]
    pub business_country: String,
    #[validate(length(min = 1, max = 20, message = "The business phone field is required."))]
    pub business_phone: String,
    #[validate(email(message = "The business email must be a valid email address."))]
    pub business_email: String,
    #[validate(url(message = "The business website must be a valid URL."))]
    pub business_website: Option<String>,
    pub business_registration_number: Option<String>,
    pub tax_identification_number: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub licenses: Vec<String>,
    pub operating_hours: Option<Value>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl From<GymApplicationRequest> for CreateGymApplication {
    fn from(req: GymApplicationRequest) -> Self {
        Self {
            user_id: Uuid::nil(),
            business_name: req.business_name,
            business_description: req.business_description,
            business_address: req.business_address,
            business_city: req.business_city,
            business_state: req.business_state,
            business_country: req.business_country,
            business_phone: req.business_phone,
            business_email: req.business_email,
            business_website: req.business_website,
            business_registration_number: req.business_registration_number,
            tax_identification_number: req.tax_identification_number,
            documents: req.documents,
            licenses: req.licenses,
            operating_hours: req.operating_hours,
            amenities: req.amenities,
        }
    }
}

/// Admin review body shared by approve, reject and require-changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(length(max = 2000))]
    pub admin_notes: Option<String>,
    #[validate(length(max = 2000))]
    pub rejection_reason: Option<String>,
}

/// `?status=` filter for the admin application queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationQuery {
    pub status: Option<ApplicationStatus>,
}

// ── Fraud reports ──────────────────────────────────────────────

/// Fraud report body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FraudReportRequest {
    pub reportable_type: ReportableKind,
    pub reportable_id: Uuid,
    pub report_type: ReportType,
    #[serde(default = "default_severity")]
    pub severity: Severity,
    #[validate(length(min = 1, max = 255, message = "The title field is required."))]
    pub title: String,
    #[validate(length(min = 10, max = 5000, message = "The description must be at least 10 characters."))]
    pub description: String,
    #[serde(default)]
    pub evidence: Vec<String>,
}

fn default_severity() -> Severity {
    Severity::Medium
}

impl From<FraudReportRequest> for NewFraudReport {
    fn from(req: FraudReportRequest) -> Self {
        Self {
            reportable: ReportableRef::new(req.reportable_type, req.reportable_id),
            report_type: req.report_type,
            severity: req.severity,
            title: req.title,
            description: req.description,
            evidence: req.evidence,
        }
    }
}

/// Assignment body; omitting `admin_id` assigns the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AssignReportRequest {
    pub admin_id: Option<Uuid>,
}

/// Investigation or closing notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ReportNotesRequest {
    #[validate(length(max = 5000))]
    pub notes: Option<String>,
}

/// Admin fraud queue filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FraudReportQuery {
    pub status: Option<FraudStatus>,
    pub severity: Option<Severity>,
    pub report_type: Option<ReportType>,
}

impl From<FraudReportQuery> for FraudReportFilter {
    fn from(query: FraudReportQuery) -> Self {
        Self {
            status: query.status,
            severity: query.severity,
            report_type: query.report_type,
        }
    }
}

// ── Routines ───────────────────────────────────────────────────

/// Routine list filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutineQuery {
    pub body_region: Option<BodyRegion>,
    pub difficulty: Option<Difficulty>,
    pub day: Option<Weekday>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
}

impl From<RoutineQuery> for RoutineFilter {
    fn from(query: RoutineQuery) -> Self {
        Self {
            body_region: query.body_region,
            difficulty: query.difficulty,
            day: query.day,
            min_duration: query.min_duration,
            max_duration: query.max_duration,
            created_by: None,
        }
    }
}

/// Trainer routine body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoutineRequest {
    #[validate(length(min = 1, max = 255, message = "The name field is required."))]
    pub name: String,
    pub description: Option<String>,
    pub body_region: BodyRegion,
    pub difficulty: Difficulty,
    #[validate(range(min = 1, max = 600, message = "The estimated duration must be between 1 and 600 minutes."))]
    pub estimated_duration: i32,
    #[serde(default)]
    pub exercises: Vec<Value>,
    #[serde(default)]
    pub equipment_needed: Vec<String>,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[validate(url(message = "The video url must be a valid URL."))]
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub schedule_days: Vec<Weekday>,
}

impl From<CreateRoutineRequest> for CreateRoutine {
    fn from(req: CreateRoutineRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            body_region: req.body_region,
            difficulty: req.difficulty,
            estimated_duration: req.estimated_duration,
            exercises: req.exercises,
            equipment_needed: req.equipment_needed,
            target_muscles: req.target_muscles,
            video_url: req.video_url,
            thumbnail: req.thumbnail,
            schedule_days: req.schedule_days,
            created_by: Uuid::nil(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_role_defaults_to_member() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "Str0ng&Secret!",
            "password_confirmation": "Str0ng&Secret!"
        }))
        .unwrap();
        assert_eq!(req.into_input().unwrap().role, UserRole::Member);
    }

    #[test]
    fn test_register_rejects_unknown_role() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "x",
            "password_confirmation": "x",
            "role": "superuser"
        }))
        .unwrap();
        let err = req.into_input().unwrap_err();
        assert!(err.details.unwrap()["errors"]["role"].is_array());
    }

    #[test]
    fn test_gym_coordinates_are_range_checked() {
        let req: CreateGymRequest = serde_json::from_value(json!({
            "name": "Iron Temple",
            "phone": "+2348000000000",
            "address": "1 Marina Rd",
            "city": "Lagos",
            "state": "Lagos",
            "country": "Nigeria",
            "latitude": 91.0,
            "longitude": 3.4
        }))
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("latitude"));
        assert!(!errors.field_errors().contains_key("longitude"));
    }

    #[test]
    fn test_booking_times_accept_both_formats() {
        let req = CreateBookingRequest {
            instructor_id: Uuid::nil(),
            booking_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            start_time: "09:00".into(),
            end_time: "10:30:00".into(),
            notes: None,
        };
        let input = req.into_input().unwrap();
        assert_eq!(input.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(input.end_time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    }

    #[test]
    fn test_bad_booking_time_is_a_field_error() {
        let req = CreateBookingRequest {
            instructor_id: Uuid::nil(),
            booking_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            start_time: "nine".into(),
            end_time: "10:00".into(),
            notes: None,
        };
        let err = req.into_input().unwrap_err();
        assert!(err.details.unwrap()["errors"]["start_time"].is_array());
    }

    #[test]
    fn test_login_device_token_requires_platform() {
        let req: LoginRequest = serde_json::from_value(json!({
            "email": "ada@example.com",
            "password": "secret",
            "device_token": "tok-1"
        }))
        .unwrap();
        assert!(req.into_input().is_err());
    }
}
