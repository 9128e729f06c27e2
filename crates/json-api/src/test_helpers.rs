//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use showroom::{
    catalog::Catalog,
    feedback::Rating,
    orders::{OrderItem, OrderStatus, PaymentMethod},
};
use showroom_app::{
    auth::{MockAuthService, Role, Session},
    context::AppContext,
    domain::{
        contacts::{
            MockContactsService,
            records::{ContactRecord, ContactUuid},
        },
        feedback::{
            MockFeedbackService,
            records::{FeedbackRecord, FeedbackUuid},
        },
        orders::{
            MockOrdersService,
            records::{OrderRecord, OrderUuid},
        },
    },
};
use testresult::TestResult;
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_ID: &str = "user_test";

/// Inserts a verified session with the given role, standing in for the auth
/// middleware.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InjectSession {
    role: Role,
}

#[salvo::handler]
impl InjectSession {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_session(Session {
            user_id: TEST_USER_ID.to_string(),
            role: self.role,
        });

        ctrl.call_next(req, depot, res).await;
    }
}

pub(crate) fn inject_session(role: Role) -> InjectSession {
    InjectSession { role }
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();
    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_update_status().never();
    orders.expect_update_field().never();

    orders
}

fn strict_feedback_mock() -> MockFeedbackService {
    let mut feedback = MockFeedbackService::new();

    feedback.expect_create_feedback().never();
    feedback.expect_list_feedback().never();
    feedback.expect_top_feedback().never();

    feedback
}

fn strict_contacts_mock() -> MockContactsService {
    let mut contacts = MockContactsService::new();

    contacts.expect_create_contact().never();
    contacts.expect_list_contacts().never();

    contacts
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn make_state(
    orders: MockOrdersService,
    feedback: MockFeedbackService,
    contacts: MockContactsService,
    auth: MockAuthService,
) -> TestResult<Arc<State>> {
    Ok(State::from_app_context(AppContext {
        catalog: Arc::new(Catalog::furniture()?),
        orders: Arc::new(orders),
        feedback: Arc::new(feedback),
        contacts: Arc::new(contacts),
        auth: Arc::new(auth),
    }))
}

pub(crate) fn catalog_state() -> TestResult<Arc<State>> {
    make_state(
        strict_orders_mock(),
        strict_feedback_mock(),
        strict_contacts_mock(),
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> TestResult<Arc<State>> {
    make_state(
        orders,
        strict_feedback_mock(),
        strict_contacts_mock(),
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_feedback(feedback: MockFeedbackService) -> TestResult<Arc<State>> {
    make_state(
        strict_orders_mock(),
        feedback,
        strict_contacts_mock(),
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_contacts(contacts: MockContactsService) -> TestResult<Arc<State>> {
    make_state(
        strict_orders_mock(),
        strict_feedback_mock(),
        contacts,
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> TestResult<Arc<State>> {
    make_state(
        strict_orders_mock(),
        strict_feedback_mock(),
        strict_contacts_mock(),
        auth,
    )
}

pub(crate) fn catalog_service(route: Router) -> TestResult<Service> {
    Ok(Service::new(
        Router::new().hoop(inject(catalog_state()?)).push(route),
    ))
}

/// Orders routes as seen by a signed-in session with `role`.
pub(crate) fn orders_service(
    orders: MockOrdersService,
    role: Role,
    route: Router,
) -> TestResult<Service> {
    Ok(Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)?))
            .hoop(inject_session(role))
            .push(route),
    ))
}

pub(crate) fn feedback_service(feedback: MockFeedbackService, route: Router) -> TestResult<Service> {
    Ok(Service::new(
        Router::new()
            .hoop(inject(state_with_feedback(feedback)?))
            .push(route),
    ))
}

pub(crate) fn contacts_service(contacts: MockContactsService, route: Router) -> TestResult<Service> {
    Ok(Service::new(
        Router::new()
            .hoop(inject(state_with_contacts(contacts)?))
            .push(route),
    ))
}

pub(crate) fn make_order(uuid: Uuid, status: OrderStatus) -> OrderRecord {
    OrderRecord {
        uuid: OrderUuid::from_uuid(uuid),
        user_id: Some(TEST_USER_ID.to_string()),
        customer_name: "Ayesha Khan".to_string(),
        phone: "0300 1234567".to_string(),
        address: "12 Canal Road".to_string(),
        city: "Lahore".to_string(),
        notes: String::new(),
        payment_method: PaymentMethod::CashOnDelivery,
        total_amount: 2_500,
        status,
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
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_feedback(role: &str, rating: i64) -> FeedbackRecord {
    FeedbackRecord {
        uuid: FeedbackUuid::new(),
        name: "Bilal".to_string(),
        email: "bilal@example.pk".to_string(),
        role: role.to_string(),
        location: "Karachi".to_string(),
        rating: Rating::clamped(rating),
        purchased_items: vec!["Wall Panel".to_string()],
        product_name: "Wall Panel".to_string(),
        feedback_text: "Great finish.".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_contact() -> ContactRecord {
    ContactRecord {
        uuid: ContactUuid::new(),
        name: "Sana Malik".to_string(),
        email: "sana@example.com".to_string(),
        subject: String::new(),
        message: "Do you deliver to Multan?".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
