use super::*;
use test_utils::factory::demanda::DemandaFactory;

/// Tests listing with the default page size over 25 rows.
///
/// Expected: page 1 has 20 rows, page 2 has 5, total 25 on both
#[tokio::test]
async fn lists_pages_with_total() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let db = test.db.as_ref().unwrap();

    factory::create_demandas(db, 25).await?;

    let service = DemandaService::new(db);

    let page1 = service
        .list(ListDemandasParams::from_query(Some("1"), Some("20"), None, None, None))
        .await
        .unwrap();
    assert_eq!(page1.demandas.len(), 20);
    assert_eq!(page1.total, 25);
    assert_eq!(page1.page, 1);
    assert_eq!(page1.page_size, 20);

    let page2 = service
        .list(ListDemandasParams::from_query(Some("2"), Some("20"), None, None, None))
        .await
        .unwrap();
    assert_eq!(page2.demandas.len(), 5);
    assert_eq!(page2.total, 25);

    Ok(())
}

/// Tests that the total without filters counts every row.
///
/// Expected: total equals all rows even when the page is smaller
#[tokio::test]
async fn total_is_independent_of_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let db = test.db.as_ref().unwrap();

    factory::create_demandas(db, 4).await?;

    let service = DemandaService::new(db);
    let result = service
        .list(ListDemandasParams::from_query(None, Some("1"), None, None, None))
        .await
        .unwrap();

    assert_eq!(result.demandas.len(), 1);
    assert_eq!(result.total, 4);

    Ok(())
}

/// Tests conjunctive status and tipo filters through the service.
///
/// Expected: every returned row matches both filters
#[tokio::test]
async fn filters_are_conjunctive() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let db = test.db.as_ref().unwrap();

    for (status, tipo) in [
        ("Concluída", "X"),
        ("Concluída", "Y"),
        ("Recebida", "X"),
        ("Concluída", "X"),
    ] {
        DemandaFactory::new(db).status(status).tipo(tipo).build().await?;
    }

    let service = DemandaService::new(db);
    let result = service
        .list(ListDemandasParams::from_query(
            None,
            None,
            Some("Concluída".to_string()),
            Some("X".to_string()),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(result.total, 2);
    assert!(result
        .demandas
        .iter()
        .all(|d| d.status == DemandaStatus::Concluida && d.tipo == "X"));

    Ok(())
}
