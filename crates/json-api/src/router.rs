//! App Router

use salvo::Router;

use crate::{admin, auth, catalog, contacts, feedback, orders};

pub fn app_router() -> Router {
    Router::new()
        .push(catalog_router())
        .push(
            Router::with_path("feedback")
                .get(feedback::index::handler)
                .post(feedback::create::handler)
                .push(Router::with_path("top").get(feedback::top::handler)),
        )
        .push(Router::with_path("contacts").post(contacts::create::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("orders")
                        .post(orders::create::handler)
                        .push(Router::with_path("{order}").get(orders::get::handler)),
                )
                .push(
                    Router::with_path("admin/orders")
                        .hoop(auth::admin::handler)
                        .get(admin::index::handler)
                        .push(
                            Router::with_path("{order}")
                                .patch(admin::update::handler)
                                .push(Router::with_path("status").put(admin::status::handler)),
                        ),
                ),
        )
}

fn catalog_router() -> Router {
    Router::new()
        .push(
            Router::with_path("categories")
                .get(catalog::index::handler)
                .push(
                    Router::with_path("{slug}")
                        .get(catalog::get::handler)
                        .push(
                            Router::with_path("{sub}/products")
                                .get(catalog::products::handler),
                        ),
                ),
        )
        .push(Router::with_path("products/{id}").get(catalog::product::handler))
        .push(Router::with_path("search").get(catalog::search::handler))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::catalog_state;

    use super::*;

    fn make_service() -> TestResult<Service> {
        Ok(Service::new(
            Router::new()
                .hoop(inject(catalog_state()?))
                .push(app_router()),
        ))
    }

    #[tokio::test]
    async fn test_catalog_is_public() -> TestResult {
        let mut res = TestClient::get("http://example.com/categories/roller-blinds")
            .send(&make_service()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_string().await?.contains("roller-blinds"));

        Ok(())
    }

    #[tokio::test]
    async fn test_orders_require_sign_in() -> TestResult {
        let res = TestClient::post("http://example.com/orders")
            .send(&make_service()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_orders_require_sign_in() -> TestResult {
        let res = TestClient::get("http://example.com/admin/orders")
            .send(&make_service()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
