use application::service::{CreateCustomerService, GetCustomerService, UpdateCustomerService};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use error_stack::Report;
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CustomerRequest, CustomerTransformer, GetCustomerRequest, GetCustomersRequest,
};
use crate::response::CustomerPresenter;

pub trait CustomerRouter {
    fn route_customer(self) -> Self;
}

impl CustomerRouter for Router<AppModule> {
    fn route_customer(self) -> Self {
        self.route(
            "/customers",
            get(
                |State(handler): State<AppModule>, Query(req): Query<GetCustomersRequest>| async move {
                    Controller::new(CustomerTransformer, CustomerPresenter)
                        .intake(req)
                        .handle(|dto| handler.pgpool().get_customers(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<Json<CustomerRequest>, ErrorStatus>| async move {
                    Controller::new(CustomerTransformer, CustomerPresenter)
                        .try_intake(req)?
                        .handle(|dto| handler.pgpool().create_customer(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/customers/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<i32>| async move {
                    Controller::new(CustomerTransformer, CustomerPresenter)
                        .intake(GetCustomerRequest::new(id))
                        .handle(|dto| handler.pgpool().get_customer(dto))
                        .await
                        .map_err(ErrorStatus::from)?
                        .ok_or_else(|| {
                            ErrorStatus::from(
                                Report::new(KernelError::NotFound)
                                    .attach_printable(format!("customer_id: {id}")),
                            )
                        })
                },
            )
            .put(
                |State(handler): State<AppModule>,
                 Path(id): Path<i32>,
                 WithRejection(Json(req), _): WithRejection<Json<CustomerRequest>, ErrorStatus>| async move {
                    Controller::new(CustomerTransformer, CustomerPresenter)
                        .try_intake((id, req))?
                        .handle(|dto| handler.pgpool().update_customer(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
