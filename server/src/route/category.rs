use application::service::{CreateCategoryService, GetCategoryService};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{CategoryTransformer, CreateCategoryRequest};
use crate::response::CategoryPresenter;

pub trait CategoryRouter {
    fn route_category(self) -> Self;
}

impl CategoryRouter for Router<AppModule> {
    fn route_category(self) -> Self {
        self.route(
            "/categories",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), CategoryPresenter)
                    .bypass(|| handler.pgpool().get_categories())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(handler): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<CreateCategoryRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(CategoryTransformer, CategoryPresenter)
                        .try_intake(req)?
                        .handle(|dto| handler.pgpool().create_category(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
