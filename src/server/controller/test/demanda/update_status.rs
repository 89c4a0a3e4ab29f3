use super::*;

/// Tests a valid status update.
///
/// Expected: 200 with `{ok, id, status}`
#[tokio::test]
async fn updates_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    let demanda = factory::create_demanda(db).await?;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/demanda/{}/status", demanda.id),
        Some(json!({ "status": "Em andamento" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "ok": true, "id": demanda.id, "status": "Em andamento" })
    );

    Ok(())
}

/// Tests that repeating an identical update gives the same response.
///
/// Expected: 200 twice with identical bodies
#[tokio::test]
async fn repeated_update_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    let demanda = factory::create_demanda(db).await?;
    let uri = format!("/demanda/{}/status", demanda.id);

    let first = send(&app, "PUT", &uri, Some(json!({ "status": "Concluída" }))).await;
    let second = send(&app, "PUT", &uri, Some(json!({ "status": "Concluída" }))).await;

    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(first, second);

    let (_, listed) = send(&app, "GET", "/demanda/listar", None).await;
    assert_eq!(listed["data"][0]["status"], "Concluída");

    Ok(())
}

/// Tests an update with a status outside the enumeration.
///
/// Expected: 400 and the stored status unchanged
#[tokio::test]
async fn rejects_invalid_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    let demanda = factory::create_demanda(db).await?;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/demanda/{}/status", demanda.id),
        Some(json!({ "status": "Invalida" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Status inválido");

    let (_, listed) = send(&app, "GET", "/demanda/listar", None).await;
    assert_eq!(listed["data"][0]["status"], "Recebida");

    Ok(())
}

/// Tests an update for a demand that does not exist.
///
/// Expected: 404 with the not-found message
#[tokio::test]
async fn returns_404_for_missing_demanda() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(
        &app,
        "PUT",
        "/demanda/999999/status",
        Some(json!({ "status": "Concluída" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Demanda não encontrada");

    Ok(())
}

/// Tests an update addressed by a non-numeric id.
///
/// Expected: 400 before any storage access
#[tokio::test]
async fn rejects_non_numeric_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(
        &app,
        "PUT",
        "/demanda/abc/status",
        Some(json!({ "status": "Concluída" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ID inválido");

    Ok(())
}

/// Tests a numeric id larger than any stored id.
///
/// Expected: 404 like any other id without a row, after body validation
#[tokio::test]
async fn returns_404_for_id_beyond_storage_range() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(
        &app,
        "PUT",
        "/demanda/99999999999/status",
        Some(json!({ "status": "Concluída" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Demanda não encontrada");

    let (status, _) = send(
        &app,
        "PUT",
        "/demanda/99999999999/status",
        Some(json!({ "status": "Invalida" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}
