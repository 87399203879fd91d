use registry_core::{
    seed_customers, Customer, CustomerError, CustomerPatch, CustomerRepository, CustomerService,
    InMemoryCustomerRepository, NameField,
};

fn seeded_service() -> CustomerService<InMemoryCustomerRepository> {
    CustomerService::new(InMemoryCustomerRepository::with_customers(
        seed_customers(),
    ))
}

fn emails(service: &CustomerService<InMemoryCustomerRepository>) -> Vec<String> {
    service.list().iter().map(|c| c.email.clone()).collect()
}

#[test]
fn register_appends_in_order() {
    let mut service = CustomerService::new(InMemoryCustomerRepository::new());

    let created = service
        .register("Lucía", "Núñez", "lucia.nunez@example.com")
        .unwrap();
    service
        .register("Pedro", "Sánchez Ruiz", "pedro+ventas@example.es")
        .unwrap();

    assert_eq!(created, Customer::new("Lucía", "Núñez", "lucia.nunez@example.com"));
    assert_eq!(
        emails(&service),
        ["lucia.nunez@example.com", "pedro+ventas@example.es"]
    );
}

#[test]
fn register_duplicate_email_is_rejected_and_store_unchanged() {
    let mut service = seeded_service();

    let err = service
        .register("Carlos", "López", "carlos.lopez@gmail.com")
        .unwrap_err();

    assert_eq!(
        err,
        CustomerError::DuplicateEmail("carlos.lopez@gmail.com".to_string())
    );
    assert_eq!(service.list().len(), 3);
}

#[test]
fn register_rejects_invalid_fields_in_order() {
    let mut service = CustomerService::new(InMemoryCustomerRepository::new());

    assert_eq!(
        service.register("", "López", "a@b.co").unwrap_err(),
        CustomerError::InvalidNameFormat {
            field: NameField::FirstName
        }
    );
    assert_eq!(
        service.register("Carlos", "L0pez", "a@b.co").unwrap_err(),
        CustomerError::InvalidNameFormat {
            field: NameField::LastName
        }
    );
    assert!(matches!(
        service.register("Carlos", "López", "a@b"),
        Err(CustomerError::InvalidEmailFormat(_))
    ));
    assert!(service.list().is_empty());
}

#[test]
fn update_first_name_only_keeps_other_fields() {
    let mut service = seeded_service();

    let updated = service
        .update(
            "maria.perez@yahoo.com",
            CustomerPatch {
                first_name: Some("Mara".to_string()),
                ..CustomerPatch::default()
            },
        )
        .unwrap();

    let expected = Customer::new("Mara", "Pérez", "maria.perez@yahoo.com");
    assert_eq!(updated, expected);
    assert_eq!(service.find("maria.perez@yahoo.com"), Some(&expected));
}

#[test]
fn update_with_own_email_is_not_a_duplicate() {
    let mut service = seeded_service();

    let updated = service
        .update(
            "ana.garcia@hotmail.com",
            CustomerPatch {
                email: Some("ana.garcia@hotmail.com".to_string()),
                ..CustomerPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.email, "ana.garcia@hotmail.com");
}

#[test]
fn update_to_another_customers_email_is_duplicate() {
    let mut service = seeded_service();

    let err = service
        .update(
            "ana.garcia@hotmail.com",
            CustomerPatch {
                email: Some("carlos.lopez@gmail.com".to_string()),
                ..CustomerPatch::default()
            },
        )
        .unwrap_err();

    assert_eq!(
        err,
        CustomerError::DuplicateEmail("carlos.lopez@gmail.com".to_string())
    );
    assert!(service.find("ana.garcia@hotmail.com").is_some());
}

#[test]
fn update_changes_email_in_place() {
    let mut service = seeded_service();

    service
        .update(
            "carlos.lopez@gmail.com",
            CustomerPatch {
                email: Some("carlos@lopez.dev".to_string()),
                ..CustomerPatch::default()
            },
        )
        .unwrap();

    assert_eq!(
        emails(&service),
        [
            "carlos@lopez.dev",
            "maria.perez@yahoo.com",
            "ana.garcia@hotmail.com"
        ]
    );
    assert!(service.find("carlos.lopez@gmail.com").is_none());
}

#[test]
fn update_missing_customer_reports_not_found() {
    let mut service = seeded_service();

    let err = service
        .update("nobody@example.com", CustomerPatch::default())
        .unwrap_err();

    assert_eq!(
        err,
        CustomerError::RecordNotFound("nobody@example.com".to_string())
    );
}

#[test]
fn delete_removes_only_target_and_keeps_order() {
    let mut service = seeded_service();

    let removed = service.delete("ana.garcia@hotmail.com").unwrap();

    assert_eq!(removed.first_name, "Ana");
    assert_eq!(
        emails(&service),
        ["carlos.lopez@gmail.com", "maria.perez@yahoo.com"]
    );
    assert_eq!(
        service.delete("ana.garcia@hotmail.com").unwrap_err(),
        CustomerError::RecordNotFound("ana.garcia@hotmail.com".to_string())
    );
}

#[test]
fn store_append_then_remove_round_trip() {
    let mut repo = InMemoryCustomerRepository::with_customers(seed_customers());
    let before = repo.len();

    repo.append(Customer::new("Eva", "Ortiz", "eva@ortiz.es"));
    let service = CustomerService::new(repo.clone());
    assert!(service.is_duplicate_email("eva@ortiz.es", None));
    assert!(!service.is_duplicate_email("eva@ortiz.es", Some("eva@ortiz.es")));

    repo.remove_by_email("eva@ortiz.es").unwrap();
    assert!(repo.find_by_email("eva@ortiz.es").is_none());
    assert_eq!(repo.len(), before);
}
