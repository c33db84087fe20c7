use gradebook::utils::password::hash_password;
#[allow(unused_imports)]
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

#[allow(dead_code)]
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4().simple())
}

fn unique_tag(prefix: &str) -> String {
    format!("{}@{}", prefix, &Uuid::new_v4().simple().to_string()[..10])
}

#[allow(dead_code)]
pub async fn create_student(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
) -> Uuid {
    let hashed = hash_password(password).unwrap();

    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (first_name, last_name, email, password, role, admission_number)
         VALUES ('Test', 'Student', $1, $2, 'student', $3)
         RETURNING id",
    )
    .bind(email)
    .bind(&hashed)
    .bind(unique_tag("STU"))
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_teacher(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
) -> Uuid {
    let hashed = hash_password(password).unwrap();

    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (first_name, last_name, email, password, role, employee_number)
         VALUES ('Test', 'Teacher', $1, $2, 'teacher', $3)
         RETURNING id",
    )
    .bind(email)
    .bind(&hashed)
    .bind(unique_tag("TCH"))
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_course(
    tx: &mut Transaction<'_, Postgres>,
    teacher_id: Uuid,
    course_code: &str,
    credit_hours: i32,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (name, course_code, credit_hours, teacher_id)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(format!("Course {course_code}"))
    .bind(course_code)
    .bind(credit_hours)
    .bind(teacher_id)
    .fetch_one(&mut **tx)
    .await
    .unwrap()
}
