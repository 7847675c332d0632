pub mod posterior;
pub mod ranking;

pub use posterior::{
    conditional_joint, global_marginal_joint, posterior_for, single_symptom_posterior, Posterior,
    PosteriorFactors,
};
pub use ranking::{rank, RankingResult};

use serde::{Deserialize, Serialize};

/// How the denominator p(symptom_1, ..., symptom_n) is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointModel {
    /// Product of the query symptoms' frequencies *for the disorder being
    /// scored*, taken separately over low and high bounds.
    #[default]
    DisorderConditional,
    /// Product of the catalog-wide marginals `p_symptom`; identical for both
    /// bounds and for every disorder.
    GlobalMarginal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingOptions {
    pub joint_model: JointModel,
    /// Drop conditional bounds equal to zero from the log-space joint
    /// product instead of letting them zero the joint.
    pub skip_zero_conditional_bounds: bool,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            joint_model: JointModel::DisorderConditional,
            skip_zero_conditional_bounds: true,
        }
    }
}
