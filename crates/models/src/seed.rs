//! Sample catalog loaded on a clean start.

use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};

use crate::{service, service_version};

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "01836a4b-c000-7fd0-b89a-c0e51546b001",
        "Locate Us",
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Turpis non a, pellentesque ipsumaliquet id ligula, tincidunt ut orci.",
    ),
    ("01836a4b-c001-7fd1-b89a-c0e51546b002", "Collect Money", ""),
    (
        "01836a4b-c002-7fd2-b89a-c0e51546b003",
        "Contact Us",
        "Lorem ipsum dolor sit amet, consectetur adipiscing",
    ),
    (
        "01836a4b-c003-7fd3-b89a-c0e51546b004",
        "Contact Us",
        "Lorem ipsum dolor sit amet, consectetur adipiscing",
    ),
    ("01836a4b-c004-7fd4-b89a-c0e51546b005", "FX Rates International", "Lorem ipsum dolor"),
    // stored without hyphens on purpose; ids are opaque strings
    (
        "01836a4bc0057fd5b89ac0e51546b006",
        "FX Rates International [Internal]",
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Turpis non a, pellentesque ipsumaliquet id, ornare in lacus.",
    ),
    ("01836a4b-c006-7fd6-b89a-c0e51546b007", "Notifications", ""),
    ("01836a4b-c007-7fd7-b89a-c0e51546b008", "Notifications", ""),
    ("01836a4b-c008-7fd8-b89a-c0e51546b009", "Priority Services", ""),
    (
        "01836a4b-c009-7fd9-b89a-c0e51546b00a",
        "Reporting",
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Turpis non a, pellentesque ipsumaliquet id arcu, gravida quis.",
    ),
    ("01836a4b-c00a-7fda-b89a-c0e51546b00b", "Security", "Lorem ipsum dolor"),
    ("01836a4b-c00b-7fdb-b89a-c0e51546b00c", "Security", "Lorem ipsum dolor"),
];

const VERSIONS: &[(&str, &str, &str)] = &[
    ("01836b4b-c100-7fd0-b89a-c0e51546b101", "01836a4b-c000-7fd0-b89a-c0e51546b001", "v1.0"),
    ("01836b4b-c101-7fd1-b89a-c0e51546b102", "01836a4b-c000-7fd0-b89a-c0e51546b001", "v1.1-alpha"),
    ("01836b4b-c102-7fd2-b89a-c0e51546b103", "01836a4b-c000-7fd0-b89a-c0e51546b001", "v2.0-beta"),
    ("01836b4b-c103-7fd3-b89a-c0e51546b104", "01836a4b-c001-7fd1-b89a-c0e51546b002", "v1.0"),
    ("01836b4b-c104-7fd4-b89a-c0e51546b105", "01836a4b-c001-7fd1-b89a-c0e51546b002", "v1.2-preview"),
    ("01836b4b-c105-7fd5-b89a-c0e51546b106", "01836a4b-c001-7fd1-b89a-c0e51546b002", "v2.1-stable"),
    ("01836b4b-c106-7fd6-b89a-c0e51546b107", "01836a4b-c002-7fd2-b89a-c0e51546b003", "v1.0"),
    ("01836b4b-c107-7fd7-b89a-c0e51546b108", "01836a4b-c002-7fd2-b89a-c0e51546b003", "v1.5"),
    ("01836b4b-c108-7fd8-b89a-c0e51546b109", "01836a4b-c002-7fd2-b89a-c0e51546b003", "v2.3"),
    ("01836b4b-c109-7fd9-b89a-c0e51546b110", "01836a4b-c003-7fd3-b89a-c0e51546b004", "v1.0"),
    ("01836b4b-c110-7fda-b89a-c0e51546b111", "01836a4b-c003-7fd3-b89a-c0e51546b004", "v1.2"),
    ("01836b4b-c111-7fdb-b89a-c0e51546b112", "01836a4b-c003-7fd3-b89a-c0e51546b004", "v2.0"),
    ("01836b4b-c112-7fdc-b89a-c0e51546b113", "01836a4b-c004-7fd4-b89a-c0e51546b005", "v1.0"),
    ("01836b4b-c113-7fdd-b89a-c0e51546b114", "01836a4b-c004-7fd4-b89a-c0e51546b005", "v1.3-staging"),
    ("01836b4b-c114-7fde-b89a-c0e51546b115", "01836a4b-c004-7fd4-b89a-c0e51546b005", "v2.0-release"),
    ("01836b4b-c115-7fdf-b89a-c0e51546b116", "01836a4bc0057fd5b89ac0e51546b006", "v1.0"),
    ("01836b4b-c116-7fe0-b89a-c0e51546b117", "01836a4bc0057fd5b89ac0e51546b006", "v1.2"),
    ("01836b4b-c117-7fe1-b89a-c0e51546b118", "01836a4bc0057fd5b89ac0e51546b006", "v2.1"),
    ("01836b4b-c106-7fd6-b89a-c0e51546b119", "01836a4b-c006-7fd6-b89a-c0e51546b007", "v1.1"),
    ("01836b4b-c107-7fd7-b89a-c0e51546b120", "01836a4b-c006-7fd6-b89a-c0e51546b007", "v1.8"),
    ("01836b4b-c108-7fd8-b89a-c0e51546b121", "01836a4b-c006-7fd6-b89a-c0e51546b007", "v7.3"),
    ("01836b4b-c109-7fd9-b89a-c0e51546b122", "01836a4b-c007-7fd7-b89a-c0e51546b008", "v5.0"),
    ("01836b4b-c110-7fda-b89a-c0e51546b123", "01836a4b-c007-7fd7-b89a-c0e51546b008", "v4.2"),
    ("01836b4b-c111-7fdb-b89a-c0e51546b124", "01836a4b-c007-7fd7-b89a-c0e51546b008", "v9.0"),
    ("01836b4b-c118-7fe2-b89a-c0e51546b125", "01836a4b-c008-7fd8-b89a-c0e51546b009", "v1.0"),
    ("01836b4b-c119-7fe3-b89a-c0e51546b126", "01836a4b-c008-7fd8-b89a-c0e51546b009", "v1.4"),
    ("01836b4b-c120-7fe4-b89a-c0e51546b127", "01836a4b-c008-7fd8-b89a-c0e51546b009", "v2.0"),
    ("01836b4b-c121-7fe5-b89a-c0e51546b128", "01836a4b-c009-7fd9-b89a-c0e51546b00a", "v1.0"),
    ("01836b4b-c122-7fe6-b89a-c0e51546b129", "01836a4b-c009-7fd9-b89a-c0e51546b00a", "v1.3"),
    ("01836b4b-c123-7fe7-b89a-c0e51546b130", "01836a4b-c009-7fd9-b89a-c0e51546b00a", "v2.0"),
    ("01836b4b-c124-7fe8-b89a-c0e51546b131", "01836a4b-c00a-7fda-b89a-c0e51546b00b", "v1.0"),
    ("01836b4b-c125-7fe9-b89a-c0e51546b132", "01836a4b-c00a-7fda-b89a-c0e51546b00b", "v1.2"),
    ("01836b4b-c126-7fea-b89a-c0e51546b133", "01836a4b-c00a-7fda-b89a-c0e51546b00b", "v2.0"),
    ("01836b4b-c127-7feb-b89a-c0e51546b134", "01836a4b-c00b-7fdb-b89a-c0e51546b00c", "v1.0"),
    ("01836b4b-c128-7fec-b89a-c0e51546b135", "01836a4b-c00b-7fdb-b89a-c0e51546b00c", "v1.1"),
    ("01836b4b-c129-7fed-b89a-c0e51546b136", "01836a4b-c00b-7fdb-b89a-c0e51546b00c", "v2.0"),
];

/// Insert the sample services and versions, skipping rows that already exist.
///
/// Returns how many rows of each kind the seed carries.
pub async fn seed_catalog(db: &DatabaseConnection) -> anyhow::Result<(u64, u64)> {
    let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();

    let services = SERVICES.iter().map(|(id, name, description)| service::ActiveModel {
        id: Set((*id).to_string()),
        name: Set(Some((*name).to_string())),
        description: Set((*description).to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    });
    service::Entity::insert_many(services)
        .on_conflict(OnConflict::column(service::Column::Id).do_nothing().to_owned())
        .do_nothing()
        .exec_without_returning(db)
        .await?;

    let versions = VERSIONS.iter().map(|(id, service_id, version)| service_version::ActiveModel {
        id: Set((*id).to_string()),
        service_id: Set((*service_id).to_string()),
        version: Set((*version).to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    });
    service_version::Entity::insert_many(versions)
        .on_conflict(OnConflict::column(service_version::Column::Id).do_nothing().to_owned())
        .do_nothing()
        .exec_without_returning(db)
        .await?;

    Ok((SERVICES.len() as u64, VERSIONS.len() as u64))
}
