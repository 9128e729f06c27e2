//! Test Helpers

use jiff::Timestamp;
use showroom::{
    contact::ContactMessage,
    feedback::{FeedbackSubmission, Rating},
    orders::{OrderDraft, OrderItem, OrderStatus, PaymentMethod},
};

use crate::domain::{
    feedback::records::{FeedbackRecord, FeedbackUuid},
    orders::records::{OrderRecord, OrderUuid},
};

pub(crate) fn order_draft() -> OrderDraft {
    OrderDraft {
        user_id: Some("user_2a".to_string()),
        customer_name: "Ayesha Khan".to_string(),
        phone: "0300 1234567".to_string(),
        address: "12 Canal Road".to_string(),
        city: "Lahore".to_string(),
        notes: String::new(),
        payment_method: PaymentMethod::CashOnDelivery,
        total_amount: 2_500,
        order_items: vec![
            OrderItem {
                product_id: "wp1".to_string(),
                product_name: "Classic Wall Panel".to_string(),
                price: 1_000,
                quantity: 2,
                total: 2_000,
            },
            OrderItem {
                product_id: "mb1".to_string(),
                product_name: "Mini Blind".to_string(),
                price: 500,
                quantity: 1,
                total: 500,
            },
        ],
    }
}

pub(crate) fn order_record(status: OrderStatus) -> OrderRecord {
    let draft = order_draft();

    OrderRecord {
        uuid: OrderUuid::new(),
        user_id: draft.user_id,
        customer_name: draft.customer_name,
        phone: draft.phone,
        address: draft.address,
        city: draft.city,
        notes: draft.notes,
        payment_method: draft.payment_method,
        total_amount: draft.total_amount,
        status,
        order_items: draft.order_items,
        created_at: Timestamp::now(),
    }
}

pub(crate) fn feedback_submission(role: &str, rating: i64) -> FeedbackSubmission {
    FeedbackSubmission {
        name: "Bilal Ahmed".to_string(),
        email: "bilal@example.pk".to_string(),
        role: role.to_string(),
        location: "Karachi".to_string(),
        rating: Rating::clamped(rating),
        purchased_items: vec!["Wall Panel".to_string(), "PVC Door".to_string()],
        product_name: "Wall Panel".to_string(),
        feedback_text: "Installation was quick and tidy.".to_string(),
    }
}

pub(crate) fn feedback_record(submission: FeedbackSubmission) -> FeedbackRecord {
    FeedbackRecord {
        uuid: FeedbackUuid::new(),
        name: submission.name,
        email: submission.email,
        role: submission.role,
        location: submission.location,
        rating: submission.rating,
        purchased_items: submission.purchased_items,
        product_name: submission.product_name,
        feedback_text: submission.feedback_text,
        created_at: Timestamp::now(),
    }
}

pub(crate) fn contact_message() -> ContactMessage {
    ContactMessage {
        name: "Sana Malik".to_string(),
        email: "sana@example.com".to_string(),
        subject: String::new(),
        message: "Do you deliver to Multan?".to_string(),
    }
}
