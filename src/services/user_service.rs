// ==================== USER CRUD ====================
// Validate-then-operate logic for the "users" collection. Each function
// performs exactly one store operation; status mapping lives in the API
// layer.

use crate::{
    database::MongoDB,
    models::{User, UserPayload, UserResponse},
    utils::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;

const COLLECTION: &str = "users";

/// Insert a new User. The store assigns the identifier; the response
/// carries the full stored record including it.
pub async fn create_user(db: &MongoDB, payload: UserPayload) -> Result<UserResponse, AppError> {
    payload.validate().map_err(AppError::Validation)?;

    let collection = db.collection::<User>(COLLECTION);
    let mut user = payload.into_user();

    let result = collection.insert_one(&user).await?;
    let id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::Database("insert did not return an ObjectId".to_string()))?;

    user.id = Some(id);
    log::info!("Created user {}", id.to_hex());

    Ok(UserResponse::from(user))
}

/// All stored users, in the store's natural cursor order (no insertion
/// order guarantee).
pub async fn list_users(db: &MongoDB) -> Result<Vec<UserResponse>, AppError> {
    let collection = db.collection::<User>(COLLECTION);
    let mut cursor = collection.find(doc! {}).await?;

    let mut users = Vec::new();
    while let Some(result) = cursor.next().await {
        users.push(UserResponse::from(result?));
    }

    Ok(users)
}

/// Full-document replace of the user with the given id, returning the
/// updated record. Validation runs before the lookup, so an invalid
/// payload yields a validation error even for an unknown id. `Ok(None)`
/// means no such document.
///
/// Replace semantics, not merge: the stored document afterwards holds
/// exactly the supplied fields plus its original `_id`.
pub async fn update_user(
    db: &MongoDB,
    id: &str,
    payload: UserPayload,
) -> Result<Option<UserResponse>, AppError> {
    payload.validate().map_err(AppError::Validation)?;

    // An id that is not a valid ObjectId can never match a stored document.
    let oid = match ObjectId::parse_str(id) {
        Ok(oid) => oid,
        Err(_) => return Ok(None),
    };

    let collection = db.collection::<User>(COLLECTION);
    let updated = collection
        .find_one_and_replace(doc! { "_id": oid }, payload.into_user())
        .return_document(ReturnDocument::After)
        .await?;

    if updated.is_some() {
        log::info!("Updated user {}", oid.to_hex());
    }

    Ok(updated.map(UserResponse::from))
}

/// Remove the user with the given id, returning the deleted record.
/// `Ok(None)` means no such document.
pub async fn delete_user(db: &MongoDB, id: &str) -> Result<Option<UserResponse>, AppError> {
    let oid = match ObjectId::parse_str(id) {
        Ok(oid) => oid,
        Err(_) => return Ok(None),
    };

    let collection = db.collection::<User>(COLLECTION);
    let deleted = collection.find_one_and_delete(doc! { "_id": oid }).await?;

    if deleted.is_some() {
        log::info!("Deleted user {}", oid.to_hex());
    }

    Ok(deleted.map(UserResponse::from))
}
