use application::service::{CreateRentalService, GetRentalService, ReturnRentalService};
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateRentalRequest, GetRentalsRequest, RentalTransformer, ReturnRentalRequest,
};
use crate::response::RentalPresenter;

pub trait RentalRouter {
    fn route_rental(self) -> Self;
}

impl RentalRouter for Router<AppModule> {
    fn route_rental(self) -> Self {
        self.route(
            "/rentals",
            get(
                |State(handler): State<AppModule>, Query(req): Query<GetRentalsRequest>| async move {
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake(req)
                        .handle(|dto| handler.pgpool().get_rentals(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<CreateRentalRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(RentalTransformer, RentalPresenter)
                        .try_intake(req)?
                        .handle(|dto| handler.pgpool().create_rental(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/rentals/:id/return",
            post(
                |State(handler): State<AppModule>, Path(id): Path<i32>| async move {
                    let policy = *handler.late_fee_policy();
                    Controller::new(RentalTransformer, RentalPresenter)
                        .intake(ReturnRentalRequest::new(id, policy))
                        .handle(|dto| handler.pgpool().return_rental(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
