use application::service::{CreateGameService, GetGameService};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{CreateGameRequest, GameTransformer, GetGamesRequest};
use crate::response::GamePresenter;

pub trait GameRouter {
    fn route_game(self) -> Self;
}

impl GameRouter for Router<AppModule> {
    fn route_game(self) -> Self {
        self.route(
            "/games",
            get(
                |State(handler): State<AppModule>, Query(req): Query<GetGamesRequest>| async move {
                    Controller::new(GameTransformer, GamePresenter)
                        .intake(req)
                        .handle(|dto| handler.pgpool().get_games(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<
                    Json<CreateGameRequest>,
                    ErrorStatus,
                >| async move {
                    Controller::new(GameTransformer, GamePresenter)
                        .try_intake(req)?
                        .handle(|dto| handler.pgpool().create_game(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
