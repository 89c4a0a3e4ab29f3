use super::*;

/// Tests existence checks for present and absent demands.
///
/// Expected: true for an inserted demand, false for an unknown id
#[tokio::test]
async fn checks_demanda_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let demanda = factory::create_demanda(db).await?;

    let repo = DemandaRepository::new(db);
    assert!(repo.exists(demanda.id).await?);
    assert!(!repo.exists(demanda.id + 1).await?);

    Ok(())
}
