use super::*;

/// Tests creating a demand without a user reference.
///
/// Verifies that the repository inserts the row with the given protocol number and
/// that storage assigns the default status.
///
/// Expected: Ok with status "Recebida" and null id_usuario / id_setor
#[tokio::test]
async fn creates_demanda_with_storage_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DemandaRepository::new(db);
    let demanda = repo
        .create(
            CreateDemandaParams {
                titulo: "Poste apagado".to_string(),
                descricao: "Rua das Flores sem iluminação".to_string(),
                tipo: "Iluminação".to_string(),
                id_usuario: None,
            },
            "AG-2026-123456".to_string(),
        )
        .await?;

    assert_eq!(demanda.titulo, "Poste apagado");
    assert_eq!(demanda.protocolo, "AG-2026-123456");
    assert_eq!(demanda.status, DemandaStatus::Recebida.as_str());
    assert!(demanda.id_usuario.is_none());
    assert!(demanda.id_setor.is_none());

    Ok(())
}

/// Tests creating a demand linked to a user.
///
/// Expected: Ok with id_usuario stored
#[tokio::test]
async fn creates_demanda_with_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DemandaRepository::new(db);
    let demanda = repo
        .create(
            CreateDemandaParams {
                titulo: "Coleta de lixo".to_string(),
                descricao: "Coleta não passou".to_string(),
                tipo: "Limpeza".to_string(),
                id_usuario: Some(12),
            },
            "AG-2026-000042".to_string(),
        )
        .await?;

    assert_eq!(demanda.id_usuario, Some(12));

    Ok(())
}
