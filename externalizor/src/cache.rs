//! Plan cache keyed by type.

use crate::error::{ExternalizorError, ExternalizorResult};
use crate::plan::{Externalizable, ExternalizationPlan};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

type AnyPlan = Arc<dyn Any + Send + Sync>;

/// Builds each type's [`ExternalizationPlan`] once and shares it afterwards.
#[derive(Default)]
pub struct PlanCache {
    plans: RwLock<HashMap<TypeId, AnyPlan>>,
}

impl PlanCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the plan for `T`, building it on first use.
    pub fn plan<T: Externalizable>(&self) -> ExternalizorResult<Arc<ExternalizationPlan<T>>> {
        let key = TypeId::of::<T>();
        {
            let plans = self.plans.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(plan) = plans.get(&key) {
                trace!("Plan cache hit for {}", std::any::type_name::<T>());
                return Self::downcast(plan.clone());
            }
        }

        let mut plans = self.plans.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have built it while we waited for the write lock.
        if let Some(plan) = plans.get(&key) {
            return Self::downcast(plan.clone());
        }

        trace!("Plan cache miss for {}", std::any::type_name::<T>());
        let plan = Arc::new(ExternalizationPlan::<T>::build()?);
        plans.insert(key, plan.clone());
        Ok(plan)
    }

    /// Returns true if a plan for `T` has been built.
    #[must_use]
    pub fn contains<T: Externalizable>(&self) -> bool {
        self.plans
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }

    /// Number of cached plans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached plan. Plans already handed out stay valid.
    pub fn clear(&self) {
        self.plans.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    fn downcast<T: Externalizable>(plan: AnyPlan) -> ExternalizorResult<Arc<ExternalizationPlan<T>>> {
        plan.downcast::<ExternalizationPlan<T>>()
            .map_err(|_| ExternalizorError::PlanMismatch(std::any::type_name::<T>()))
    }
}

impl fmt::Debug for PlanCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanCache").field("len", &self.len()).finish()
    }
}
