//! Declarative test builder.
//!
//! Table groups and custom tables are queued on the builder and created during the final
//! `build()` call.

use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait,
};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Chain table configuration methods and finish with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_equipment_tables: bool,
    include_satellite_tables: bool,
    include_project_tables: bool,
    file_database: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the four equipment tables: LNBs, switches, motors and unicables.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_equipment_tables(mut self) -> Self {
        self.include_equipment_tables = true;
        self
    }

    /// Add the satellite, carrier and service tables.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_satellite_tables(mut self) -> Self {
        self.include_satellite_tables = true;
        self
    }

    /// Add the project, build, mapping and activity log tables.
    ///
    /// The unique `(owner_kind, owner_id, equipment_type, equipment_id)` index on mappings is
    /// created as well.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_project_tables(mut self) -> Self {
        self.include_project_tables = true;
        self
    }

    /// Back the context with a SQLite file in a temporary directory, served by a pool of
    /// several connections.
    ///
    /// The default in-memory database runs every query on one connection, so concurrent
    /// operations never overlap. Use this for tests that need them to.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_file_database(mut self) -> Self {
        self.file_database = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sdb_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), sdb_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Project)
    ///     .with_table(ProjectBuild)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables
            .push(TestContext::schema().create_table_from_entity(entity));
        self
    }

    /// Create every configured table.
    ///
    /// Table groups are created before custom tables, parents before children.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Connection or table creation failed
    /// - `Err(TestError::IoError)` - The temporary database directory could not be created
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = if self.file_database {
            TestContext::with_file().await?
        } else {
            TestContext::new().await?
        };
        let schema = TestContext::schema();

        let mut tables = Vec::new();
        let mut indexes: Vec<IndexCreateStatement> = Vec::new();

        if self.include_equipment_tables {
            tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::EquipmentLnb),
                schema.create_table_from_entity(entity::prelude::EquipmentSwitch),
                schema.create_table_from_entity(entity::prelude::EquipmentMotor),
                schema.create_table_from_entity(entity::prelude::EquipmentUnicable),
            ]);
        }

        if self.include_satellite_tables {
            tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Satellite),
                schema.create_table_from_entity(entity::prelude::SatelliteCarrier),
                schema.create_table_from_entity(entity::prelude::CarrierService),
            ]);
        }

        if self.include_project_tables {
            tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Project),
                schema.create_table_from_entity(entity::prelude::ProjectBuild),
                schema.create_table_from_entity(entity::prelude::EquipmentMapping),
                schema.create_table_from_entity(entity::prelude::ActivityLog),
            ]);
            indexes.push(
                Index::create()
                    .name("idx_equipment_mapping_owner_equipment")
                    .table(entity::prelude::EquipmentMapping)
                    .col(entity::equipment_mapping::Column::OwnerKind)
                    .col(entity::equipment_mapping::Column::OwnerId)
                    .col(entity::equipment_mapping::Column::EquipmentType)
                    .col(entity::equipment_mapping::Column::EquipmentId)
                    .unique()
                    .to_owned(),
            );
        }

        tables.extend(self.tables);
        context.with_statements(tables).await?;
        context.with_statements(indexes).await?;

        Ok(context)
    }
}
