mod helpers;

use birthdays_sdk::{
    BirthdaysSDK, CommunicationInput, CommunicationKey, DepartmentInput, DepartmentKey,
    EmployeeInput, EmployeeKey, NaiveDate, StatusCode, ID,
};
use helpers::setup::{spawn_app, ADMIN_MAIL};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn communication_input(notification_delay: i32) -> CommunicationInput {
    CommunicationInput {
        description: "Standard".into(),
        birthday_msg: "Joyeux anniversaire !".into(),
        html_birthday_msg: "<p>Joyeux anniversaire !</p>".into(),
        notification_delay,
    }
}

fn employee_input(first_name: &str, departments: Vec<ID>) -> EmployeeInput {
    EmployeeInput {
        first_name: first_name.into(),
        last_name: "Dupont".into(),
        mail: format!("{}@entreprise.ch", first_name.to_lowercase()),
        tel_number: format!("+41 79 {}", first_name),
        date_of_birth: ymd(1990, 4, 2),
        date_of_hire: ymd(2015, 9, 1),
        departments: departments
            .into_iter()
            .map(|pk_department| DepartmentKey { pk_department })
            .collect(),
    }
}

fn department_input(
    name: &str,
    manager: &ID,
    communication: &ID,
    employees: Vec<ID>,
) -> DepartmentInput {
    DepartmentInput {
        name: name.into(),
        notify_by_sms: true,
        notify_by_mail: true,
        manager: EmployeeKey {
            pk_employee: manager.clone(),
        },
        communication: CommunicationKey {
            pk_communication: communication.clone(),
        },
        employees: employees
            .into_iter()
            .map(|pk_employee| EmployeeKey { pk_employee })
            .collect(),
    }
}

/// Creates a communication and a "Direction" department managed by Marie.
/// Returns the ids of the communication, the department and Marie.
async fn setup_direction(sdk: &BirthdaysSDK) -> (ID, ID, ID) {
    let communication = sdk
        .communication
        .create(communication_input(10))
        .await
        .expect("Expected to create communication")
        .data
        .unwrap();

    // No department exists yet, so the first manager is created without one
    let marie = sdk
        .employee
        .create(employee_input("Marie", vec![]))
        .await
        .expect("Expected to create the first employee")
        .data
        .unwrap();
    assert!(marie.departments.is_empty());

    let direction = sdk
        .department
        .create(department_input(
            "Direction",
            &marie.employee.pk_employee,
            &communication.pk_communication,
            vec![marie.employee.pk_employee.clone()],
        ))
        .await
        .expect("Expected to create department")
        .data
        .unwrap();

    (
        communication.pk_communication,
        direction.pk_department,
        marie.employee.pk_employee,
    )
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::test]
async fn test_login() {
    let (app, sdk, _) = spawn_app().await;

    let res = sdk
        .auth
        .login(ADMIN_MAIL, "wrong password")
        .await
        .expect_err("Expected wrong password to be rejected");
    assert_eq!(res.status(), Some(StatusCode::FORBIDDEN));
    assert_eq!(
        res.message,
        "Les identifiants d'authentification sont invalides"
    );

    let res = sdk
        .auth
        .login("", "")
        .await
        .expect_err("Expected missing credentials to be rejected");
    assert_eq!(res.status(), Some(StatusCode::BAD_REQUEST));

    let admin = app.admin_sdk().await;
    assert!(admin.employee.get_all().await.is_ok());
}

#[actix_web::test]
async fn test_protected_routes_need_token() {
    let (_, sdk, address) = spawn_app().await;

    let res = sdk.employee.get_all().await.expect_err("Expected 401");
    assert_eq!(res.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(res.message, "Token JWT non fourni");

    let res = sdk.birthday.today().await.expect_err("Expected 401");
    assert_eq!(res.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(sdk.birthday.special().await.is_err());
    assert!(sdk.birthday.month_admin().await.is_err());
    assert!(sdk.department.get_all().await.is_err());
    assert!(sdk.communication.get_all().await.is_err());

    let forged = BirthdaysSDK::with_token(address, "not.a.token".to_string());
    let res = forged.employee.get_all().await.expect_err("Expected 401");
    assert_eq!(res.status(), Some(StatusCode::UNAUTHORIZED));

    // The month view is public
    let res = sdk.birthday.month().await.expect("Expected public month view");
    assert!(res.success);
    assert!(res.data.is_none());
}

#[actix_web::test]
async fn test_crud_communications() {
    let (app, _, _) = spawn_app().await;
    let sdk = app.admin_sdk().await;

    let res = sdk
        .communication
        .create(communication_input(31))
        .await
        .expect_err("Expected delay above 30 to be rejected");
    assert_eq!(res.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(
        res.message,
        "La durée en jour pour un rappel doit être un nombre compris entre 0 et 30"
    );

    let res = sdk
        .communication
        .create(communication_input(0))
        .await
        .expect("Expected to create communication");
    assert!(res.success);
    let communication = res.data.unwrap();
    assert_eq!(communication.notification_delay, 0);

    let mut input = communication_input(30);
    input.description = "Urgent".into();
    let updated = sdk
        .communication
        .update(&communication.pk_communication, input)
        .await
        .expect("Expected to update communication")
        .data
        .unwrap();
    assert_eq!(updated.description, "Urgent");
    assert_eq!(updated.notification_delay, 30);

    let all = sdk
        .communication
        .get_all()
        .await
        .expect("Expected to list communications")
        .data
        .unwrap();
    assert_eq!(all, vec![updated]);

    sdk.communication
        .delete(&communication.pk_communication)
        .await
        .expect("Expected to delete communication");
    let res = sdk
        .communication
        .delete(&communication.pk_communication)
        .await
        .expect_err("Expected communication to be gone");
    assert_eq!(res.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(res.message, "Les communications n'existent pas");

    let res = sdk.communication.get_all().await.unwrap();
    assert!(res.data.is_none());
}

#[actix_web::test]
async fn test_communication_in_use_is_not_deleted() {
    let (app, _, _) = spawn_app().await;
    let sdk = app.admin_sdk().await;
    let (communication_id, _, _) = setup_direction(&sdk).await;

    let res = sdk
        .communication
        .delete(&communication_id)
        .await
        .expect_err("Expected communication in use to be kept");
    assert_eq!(res.status(), Some(StatusCode::CONFLICT));
}

#[actix_web::test]
async fn test_crud_employees() {
    let (app, _, _) = spawn_app().await;
    let sdk = app.admin_sdk().await;
    let (_, direction_id, marie_id) = setup_direction(&sdk).await;

    let res = sdk
        .employee
        .create(employee_input("Paul", vec![]))
        .await
        .expect_err("Expected employee without department to be rejected");
    assert_eq!(res.status(), Some(StatusCode::BAD_REQUEST));

    let res = sdk
        .employee
        .create(employee_input("Paul", vec![ID::default()]))
        .await
        .expect_err("Expected unknown department to be rejected");
    assert_eq!(res.status(), Some(StatusCode::BAD_REQUEST));

    let res = sdk
        .employee
        .create(employee_input("Paul", vec![direction_id.clone()]))
        .await
        .expect("Expected to create employee");
    assert!(res.success);
    assert_eq!(res.message, "Le collaborateur a été ajouté avec succès");
    let paul = res.data.unwrap();
    assert_eq!(paul.employee.mail, "paul@entreprise.ch");
    assert_eq!(paul.departments.len(), 1);
    assert_eq!(paul.departments[0].name, "Direction");

    let res = sdk
        .employee
        .create(employee_input("Paul", vec![direction_id.clone()]))
        .await
        .expect_err("Expected duplicate employee to be rejected");
    assert_eq!(res.status(), Some(StatusCode::CONFLICT));
    assert_eq!(res.message, "Le collaborateur existe déjà");

    let mut input = employee_input("Paul", vec![direction_id.clone()]);
    input.last_name = "Martin".into();
    input.date_of_hire = ymd(1980, 1, 1);
    let res = sdk
        .employee
        .update(&paul.employee.pk_employee, input.clone())
        .await
        .expect_err("Expected hire before birth to be rejected");
    assert_eq!(res.status(), Some(StatusCode::BAD_REQUEST));

    input.date_of_hire = ymd(2018, 1, 1);
    let updated = sdk
        .employee
        .update(&paul.employee.pk_employee, input.clone())
        .await
        .expect("Expected to update employee")
        .data
        .unwrap();
    assert_eq!(updated.employee.last_name, "Martin");
    assert_eq!(updated.employee.date_of_hire, ymd(2018, 1, 1));

    let res = sdk
        .employee
        .update(&ID::default(), input)
        .await
        .expect_err("Expected unknown employee");
    assert_eq!(res.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(res.message, "Le collaborateur n'existe pas");

    let all = sdk.employee.get_all().await.unwrap().data.unwrap();
    assert_eq!(all.len(), 2);

    let res = sdk
        .employee
        .delete(&marie_id)
        .await
        .expect_err("Expected manager to be kept");
    assert_eq!(res.status(), Some(StatusCode::CONFLICT));
    assert!(res.message.ends_with(": Direction"));

    let res = sdk
        .employee
        .delete(&paul.employee.pk_employee)
        .await
        .expect("Expected to delete employee");
    assert!(res.success);
    assert!(res.data.is_none());

    let all = sdk.employee.get_all().await.unwrap().data.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].employee.pk_employee, marie_id);
}

#[actix_web::test]
async fn test_crud_departments() {
    let (app, _, _) = spawn_app().await;
    let sdk = app.admin_sdk().await;
    let (communication_id, direction_id, marie_id) = setup_direction(&sdk).await;

    let res = sdk
        .department
        .create(department_input("  ", &marie_id, &communication_id, vec![]))
        .await
        .expect_err("Expected blank name to be rejected");
    assert_eq!(res.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(res.message, "Le nom du département doit être spécifié");

    let res = sdk
        .department
        .create(department_input(
            "Direction",
            &marie_id,
            &communication_id,
            vec![],
        ))
        .await
        .expect_err("Expected duplicate name to be rejected");
    assert_eq!(res.status(), Some(StatusCode::CONFLICT));
    assert_eq!(res.message, "Le département existe déjà");

    let paul = sdk
        .employee
        .create(employee_input("Paul", vec![direction_id.clone()]))
        .await
        .unwrap()
        .data
        .unwrap()
        .employee;

    let sales = sdk
        .department
        .create(department_input(
            "Ventes",
            &paul.pk_employee,
            &communication_id,
            vec![paul.pk_employee.clone()],
        ))
        .await
        .expect("Expected to create department")
        .data
        .unwrap();
    assert_eq!(sales.manager.pk_employee, paul.pk_employee);
    assert_eq!(sales.employees.len(), 1);

    // Paul is in Direction and Ventes, so he may leave Direction
    let mut input = department_input(
        "Direction",
        &marie_id,
        &communication_id,
        vec![marie_id.clone()],
    );
    input.notify_by_sms = false;
    let direction = sdk
        .department
        .update(&direction_id, input)
        .await
        .expect("Expected to update department")
        .data
        .unwrap();
    assert!(!direction.notify_by_sms);
    assert_eq!(direction.employees.len(), 1);

    // Ventes is the only department left for Paul
    let res = sdk
        .department
        .update(
            &sales.pk_department,
            department_input("Ventes", &paul.pk_employee, &communication_id, vec![]),
        )
        .await
        .expect_err("Expected Paul to keep a department");
    assert_eq!(res.status(), Some(StatusCode::CONFLICT));
    assert!(res.message.ends_with(": Paul Dupont"));

    let res = sdk
        .department
        .delete(&sales.pk_department)
        .await
        .expect_err("Expected department with employees to be kept");
    assert_eq!(res.status(), Some(StatusCode::CONFLICT));

    let res = sdk
        .department
        .delete(&ID::default())
        .await
        .expect_err("Expected unknown department");
    assert_eq!(res.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(res.message, "Le département n'existe pas");

    let all = sdk.department.get_all().await.unwrap().data.unwrap();
    let names = all.iter().map(|d| d.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Direction"));
    assert!(names.contains(&"Ventes"));
}
