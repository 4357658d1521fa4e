//! Equipment row insertion.

use sea_orm::{ActiveModelTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{LnbModel, MotorModel, SwitchModel, UnicableModel},
    TestContext,
};

impl TestContext {
    pub fn equipment<'a>(&'a self) -> EquipmentFixtures<'a> {
        EquipmentFixtures { setup: self }
    }
}

pub struct EquipmentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> EquipmentFixtures<'a> {
    /// Insert an LNB built by [`factory::lnb_model`].
    ///
    /// # Returns
    /// - `Ok(LnbModel)` - The inserted row
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_lnb(&self, name: &str) -> Result<LnbModel, TestError> {
        Ok(factory::lnb_model(name)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }

    /// Insert a switch of the given stored type, e.g. `"Tone Burst"`.
    pub async fn insert_switch(
        &self,
        name: &str,
        switch_type: &str,
    ) -> Result<SwitchModel, TestError> {
        Ok(factory::switch_model(name, switch_type)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }

    pub async fn insert_motor(&self, name: &str) -> Result<MotorModel, TestError> {
        Ok(factory::motor_model(name)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }

    pub async fn insert_unicable(&self, name: &str) -> Result<UnicableModel, TestError> {
        Ok(factory::unicable_model(name)
            .into_active_model()
            .reset_all()
            .insert(&self.setup.db)
            .await?)
    }
}
