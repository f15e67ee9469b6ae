//! Job-shop assignment as a CSP world with a makespan objective.
//!
//! One variable per job, machine indices as values, every assignment
//! admitted. The objective prefers the strictly smaller makespan, so an
//! exhaustive breadth-first drive converges on an optimal assignment while
//! earlier incumbents remain readable as anytime answers.

use cairn_search::frontier::ExploreOrder;

use crate::contract::{DecoderV1, EncodedSearchV1};
use crate::csp::{csp_search, Assignment, CspProblemV1, CspSpaceV1};

/// One job-shop instance: machine count plus per-job durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobShopInstanceV1 {
    /// Number of identical machines.
    pub machines: usize,
    /// Duration of each job, indexed by job.
    pub durations: Vec<u64>,
}

/// The CSP behind one job-shop instance.
#[derive(Debug)]
pub struct JobShopProblemV1 {
    instance: JobShopInstanceV1,
    jobs: Vec<usize>,
    machine_choices: Vec<usize>,
}

impl JobShopProblemV1 {
    #[must_use]
    pub fn new(instance: JobShopInstanceV1) -> Self {
        let jobs = (0..instance.durations.len()).collect();
        let machine_choices = (0..instance.machines).collect();
        Self {
            instance,
            jobs,
            machine_choices,
        }
    }

    /// The instance this problem was built from.
    #[must_use]
    pub fn instance(&self) -> &JobShopInstanceV1 {
        &self.instance
    }
}

impl CspProblemV1 for JobShopProblemV1 {
    type Var = usize;
    type Value = usize;

    fn variables(&self) -> &[usize] {
        &self.jobs
    }

    fn candidate_values(&self, _var: &usize) -> &[usize] {
        &self.machine_choices
    }

    fn admits(&self, _partial: &Assignment<Self>) -> bool {
        // Any machine may run any job.
        true
    }

    fn prefer(&self, candidate: &Assignment<Self>, incumbent: &Assignment<Self>) -> bool {
        makespan(&self.instance, candidate) < makespan(&self.instance, incumbent)
    }
}

/// Completion time of the busiest machine under `assignment`.
#[must_use]
pub fn makespan(instance: &JobShopInstanceV1, assignment: &Assignment<JobShopProblemV1>) -> u64 {
    let mut loads = vec![0u64; instance.machines];
    for (&job, &machine) in assignment {
        loads[machine] += instance.durations[job];
    }
    loads.into_iter().max().unwrap_or(0)
}

/// Decoder to a machine index per job.
///
/// `None` decodes to the all-zeros assignment (every job on machine 0).
#[derive(Debug, Clone, Copy)]
pub struct JobShopDecoderV1 {
    job_count: usize,
}

impl DecoderV1 for JobShopDecoderV1 {
    type Node = Assignment<JobShopProblemV1>;
    type Answer = Vec<usize>;

    fn decode(&self, node: Option<&Self::Node>) -> Vec<usize> {
        match node {
            None => vec![0; self.job_count],
            Some(assignment) => (0..self.job_count)
                .map(|job| assignment.get(&job).copied().unwrap_or(0))
                .collect(),
        }
    }
}

/// Configure a breadth-first search minimizing the makespan.
#[must_use]
pub fn encode_jobshop(
    instance: JobShopInstanceV1,
) -> EncodedSearchV1<CspSpaceV1<JobShopProblemV1>, JobShopDecoderV1> {
    let job_count = instance.durations.len();
    let search = csp_search(JobShopProblemV1::new(instance), ExploreOrder::BreadthFirst);
    EncodedSearchV1 {
        world_id: "jobshop",
        search,
        decoder: JobShopDecoderV1 { job_count },
    }
}
