use super::*;

/// Tests registering a demand through the API.
///
/// Expected: 201 with a well-formed protocol and the confirmation message
#[tokio::test]
async fn creates_demanda() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(
        &app,
        "POST",
        "/demanda/nova",
        Some(json!({
            "titulo": "Calçada quebrada",
            "descricao": "Risco de queda na Rua 7",
            "tipo": "Obras",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(is_protocolo(body["protocolo"].as_str().unwrap()), "{}", body);
    assert_eq!(body["message"], "Demanda registrada com sucesso.");

    let (_, listed) = send(&app, "GET", "/demanda/listar", None).await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["data"][0]["status"], "Recebida");
    assert_eq!(listed["data"][0]["protocolo"], body["protocolo"]);
    assert!(listed["data"][0]["id_usuario"].is_null());

    Ok(())
}

/// Tests that an id_usuario in the body is stored.
///
/// Expected: 201 and the listed row carries the user id
#[tokio::test]
async fn stores_id_usuario() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(test.db.as_ref().unwrap());

    let (status, _) = send(
        &app,
        "POST",
        "/demanda/nova",
        Some(json!({
            "titulo": "Poda",
            "descricao": "Árvore sobre a fiação",
            "tipo": "Meio ambiente",
            "id_usuario": 5,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, listed) = send(&app, "GET", "/demanda/listar", None).await;
    assert_eq!(listed["data"][0]["id_usuario"], 5);

    Ok(())
}

/// Tests that each missing or empty required field is rejected.
///
/// Expected: 400 with the required-fields message and no row inserted
#[tokio::test]
async fn rejects_missing_required_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(test.db.as_ref().unwrap());

    let bodies = [
        json!({ "descricao": "d", "tipo": "t" }),
        json!({ "titulo": "x", "tipo": "t" }),
        json!({ "titulo": "x", "descricao": "d" }),
        json!({ "titulo": "", "descricao": "d", "tipo": "t" }),
        json!({}),
    ];

    for payload in bodies {
        let (status, body) = send(&app, "POST", "/demanda/nova", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Campos obrigatórios: titulo, descricao, tipo");
    }

    let (_, listed) = send(&app, "GET", "/demanda/listar", None).await;
    assert_eq!(listed["total"], 0);

    Ok(())
}

/// Tests that a body that is not JSON is a client error.
///
/// Expected: 400 with an error message
#[tokio::test]
async fn rejects_malformed_json() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(test.db.as_ref().unwrap());

    let request = Request::builder()
        .method("POST")
        .uri("/demanda/nova")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests a storage failure during creation.
///
/// Expected: 500 with the generic message and no storage details
#[tokio::test]
async fn hides_storage_failure() -> Result<(), TestError> {
    // No migrations, so the demandas table does not exist
    let test = TestBuilder::new().build().await?;
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(
        &app,
        "POST",
        "/demanda/nova",
        Some(json!({ "titulo": "t", "descricao": "d", "tipo": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Erro interno" }));

    Ok(())
}
