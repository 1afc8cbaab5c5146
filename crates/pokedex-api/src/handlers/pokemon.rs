//! Catalog CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use pokedex_core::error::AppError;

use crate::dto::request::{BulkCreatePokemonRequest, CreatePokemonRequest, UpdatePokemonRequest};
use crate::dto::response::PokemonResponse;
use crate::error::ApiError;
use crate::extractors::{PaginationParams, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/v2/pokemon
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreatePokemonRequest>,
) -> Result<(StatusCode, Json<PokemonResponse>), ApiError> {
    let pokemon = state.pokemon_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(pokemon.into())))
}

/// POST /api/v2/pokemon/bulk
pub async fn create_many(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<BulkCreatePokemonRequest>,
) -> Result<(StatusCode, Json<Vec<PokemonResponse>>), ApiError> {
    let created = state.pokemon_service.create_many(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(created.into_iter().map(PokemonResponse::from).collect()),
    ))
}

/// GET /api/v2/pokemon?limit=&offset=
pub async fn find_all(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> Result<Json<Vec<PokemonResponse>>, ApiError> {
    let records = state
        .pokemon_service
        .find_all(params.into_page_request())
        .await?;
    Ok(Json(records.into_iter().map(PokemonResponse::from).collect()))
}

/// GET /api/v2/pokemon/{term}
pub async fn find_one(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<PokemonResponse>, ApiError> {
    let pokemon = state.pokemon_service.find_one(&term).await?;
    Ok(Json(pokemon.into()))
}

/// PATCH /api/v2/pokemon/{term}
pub async fn update(
    State(state): State<AppState>,
    Path(term): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdatePokemonRequest>,
) -> Result<Json<PokemonResponse>, ApiError> {
    let pokemon = state.pokemon_service.update(&term, req.into()).await?;
    Ok(Json(pokemon.into()))
}

/// DELETE /api/v2/pokemon/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = state
        .pokemon_service
        .store()
        .parse_id(&id)
        .ok_or_else(|| AppError::bad_request(format!("'{id}' is not a valid id")))?;

    state.pokemon_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
