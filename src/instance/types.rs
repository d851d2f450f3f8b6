//! Instance data and objective evaluation.

use crate::error::{BoundsError, DataError};
use crate::sequence::{Sequence, SENTINEL};

/// Completion time of each position on the last machine.
///
/// Same length as the evaluated sequence; index 0 (the sentinel) is `0`.
pub type CompletionTimes = Vec<i64>;

/// All objective values of one sequence, computed in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Completion time per position on the last machine.
    pub completion_times: CompletionTimes,
    /// Sum of completion times.
    pub total_completion: i64,
    /// Sum of completion time times job priority.
    pub weighted_completion: i64,
    /// Completion time of the last job.
    pub makespan: i64,
    /// Total weighted tardiness (the minimized objective).
    pub tardiness: i64,
}

/// A permutation flow-shop instance with due dates and priorities.
///
/// Immutable after construction. Jobs are numbered `1..=N` and machines
/// `1..=M`; job `0` is the sentinel whose processing time is zero on every
/// machine.
///
/// The evaluation methods ([`completion_times`](Self::completion_times),
/// [`tardiness`](Self::tardiness), ...) accept any job order that starts
/// with the sentinel, including partial orders built by constructive
/// heuristics. They index the tables directly; passing a job outside
/// `0..=N` is a contract violation and panics. Use
/// [`evaluate`](Self::evaluate) for a checked entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    jobs: usize,
    machines: usize,
    /// Row-major `(jobs + 1) x machines`, row 0 is the sentinel.
    processing: Vec<i64>,
    /// Indexed by job, entry 0 unused.
    due_dates: Vec<i64>,
    /// Indexed by job, entry 0 unused.
    priorities: Vec<i64>,
}

impl Instance {
    /// Builds an instance from already materialized tables.
    ///
    /// `processing_times[j][m]` is the time of job `j + 1` on machine
    /// `m + 1`; `due_dates` and `priorities` are likewise indexed from job 1.
    pub fn new(
        processing_times: Vec<Vec<i64>>,
        due_dates: Vec<i64>,
        priorities: Vec<i64>,
    ) -> Result<Self, DataError> {
        let jobs = processing_times.len();
        let machines = processing_times.first().map_or(0, Vec::len);
        Self::with_dimensions(jobs, machines, processing_times, due_dates, priorities)
    }

    /// Like [`new`](Self::new) but checks the tables against declared
    /// dimensions, as a loader reading a header would.
    pub fn with_dimensions(
        jobs: usize,
        machines: usize,
        processing_times: Vec<Vec<i64>>,
        due_dates: Vec<i64>,
        priorities: Vec<i64>,
    ) -> Result<Self, DataError> {
        if jobs == 0 {
            return Err(DataError::NoJobs);
        }
        if machines == 0 {
            return Err(DataError::NoMachines);
        }
        if processing_times.len() != jobs {
            return Err(DataError::JobCountMismatch {
                expected: jobs,
                found: processing_times.len(),
            });
        }
        check_len("due dates", jobs, due_dates.len())?;
        check_len("priorities", jobs, priorities.len())?;

        let mut processing = vec![0; (jobs + 1) * machines];
        for (j, row) in processing_times.iter().enumerate() {
            let job = j + 1;
            if row.len() != machines {
                return Err(DataError::MachineCountMismatch {
                    job,
                    expected: machines,
                    found: row.len(),
                });
            }
            for (m, &time) in row.iter().enumerate() {
                check_non_negative("processing time", job, time)?;
                processing[job * machines + m] = time;
            }
        }
        for (j, (&due, &weight)) in due_dates.iter().zip(&priorities).enumerate() {
            check_non_negative("due date", j + 1, due)?;
            check_non_negative("priority", j + 1, weight)?;
        }

        let mut padded_due = Vec::with_capacity(jobs + 1);
        padded_due.push(0);
        padded_due.extend(due_dates);
        let mut padded_priorities = Vec::with_capacity(jobs + 1);
        padded_priorities.push(0);
        padded_priorities.extend(priorities);

        Ok(Self {
            jobs,
            machines,
            processing,
            due_dates: padded_due,
            priorities: padded_priorities,
        })
    }

    pub fn job_count(&self) -> usize {
        self.jobs
    }

    pub fn machine_count(&self) -> usize {
        self.machines
    }

    /// Processing time of `job` on `machine` (1-based).
    ///
    /// The sentinel job always takes zero time.
    pub fn processing_time(&self, job: usize, machine: usize) -> Result<i64, BoundsError> {
        if job == SENTINEL {
            return Ok(0);
        }
        self.check_job(job)?;
        if machine == 0 || machine > self.machines {
            return Err(BoundsError::Machine {
                machine,
                machines: self.machines,
            });
        }
        Ok(self.time(job, machine - 1))
    }

    /// Due date of a real job.
    pub fn due_date(&self, job: usize) -> Result<i64, BoundsError> {
        self.check_job(job)?;
        Ok(self.due_dates[job])
    }

    /// Priority weight of a real job.
    pub fn priority(&self, job: usize) -> Result<i64, BoundsError> {
        self.check_job(job)?;
        Ok(self.priorities[job])
    }

    /// Sum of a job's processing times over all machines.
    pub fn total_processing_time(&self, job: usize) -> Result<i64, BoundsError> {
        if job == SENTINEL {
            return Ok(0);
        }
        self.check_job(job)?;
        Ok(self.row(job).iter().sum())
    }

    /// Total processing time divided by priority.
    ///
    /// A zero priority yields `+inf` (or `NaN` for an all-zero job), which
    /// sorts such jobs last under a total order.
    pub fn weighted_processing_ratio(&self, job: usize) -> Result<f64, BoundsError> {
        if job == SENTINEL {
            return Ok(0.0);
        }
        self.check_job(job)?;
        Ok(self.ratio(job))
    }

    /// Unchecked [`weighted_processing_ratio`](Self::weighted_processing_ratio)
    /// for a real job.
    pub(crate) fn ratio(&self, job: usize) -> f64 {
        let total: i64 = self.row(job).iter().sum();
        total as f64 / self.priorities[job] as f64
    }

    /// Completion time of every position on the last machine.
    ///
    /// Machine 1 is a running sum. Each later machine starts a job at the
    /// later of its completion on the previous machine and the completion
    /// of the preceding job on the same machine.
    pub fn completion_times<S: AsRef<[usize]> + ?Sized>(&self, order: &S) -> CompletionTimes {
        let order = order.as_ref();
        let mut ends = vec![0i64; order.len()];

        for pos in 1..order.len() {
            ends[pos] = ends[pos - 1] + self.time(order[pos], 0);
        }
        for m in 1..self.machines {
            for pos in 1..order.len() {
                ends[pos] = ends[pos].max(ends[pos - 1]) + self.time(order[pos], m);
            }
        }
        ends
    }

    /// Sum over positions of completion time times priority.
    pub fn weighted_completion<S: AsRef<[usize]> + ?Sized>(&self, order: &S) -> i64 {
        let order = order.as_ref();
        let ends = self.completion_times(order);
        order
            .iter()
            .zip(&ends)
            .skip(1)
            .map(|(&job, &end)| end * self.priorities[job])
            .sum()
    }

    /// Total weighted tardiness of an order.
    pub fn tardiness<S: AsRef<[usize]> + ?Sized>(&self, order: &S) -> i64 {
        let order = order.as_ref();
        let ends = self.completion_times(order);
        order
            .iter()
            .zip(&ends)
            .skip(1)
            .map(|(&job, &end)| self.job_tardiness(job, end))
            .sum()
    }

    /// Every objective value in one pass over the completion times.
    pub fn metrics<S: AsRef<[usize]> + ?Sized>(&self, order: &S) -> Metrics {
        let order = order.as_ref();
        let completion_times = self.completion_times(order);

        let mut total_completion = 0;
        let mut weighted_completion = 0;
        let mut tardiness = 0;
        for (&job, &end) in order.iter().zip(&completion_times).skip(1) {
            total_completion += end;
            weighted_completion += end * self.priorities[job];
            tardiness += self.job_tardiness(job, end);
        }
        let makespan = completion_times.last().copied().unwrap_or(0);

        Metrics {
            completion_times,
            total_completion,
            weighted_completion,
            makespan,
            tardiness,
        }
    }

    /// Checked evaluation of a full sequence.
    pub fn evaluate(&self, sequence: &Sequence) -> Result<Metrics, BoundsError> {
        if sequence.job_count() != self.jobs {
            return Err(BoundsError::Sequence(format!(
                "sequence has {} jobs, instance has {}",
                sequence.job_count(),
                self.jobs
            )));
        }
        sequence.check()?;
        Ok(self.metrics(sequence))
    }

    #[inline]
    fn job_tardiness(&self, job: usize, end: i64) -> i64 {
        (end - self.due_dates[job]).max(0) * self.priorities[job]
    }

    #[inline]
    fn time(&self, job: usize, machine_idx: usize) -> i64 {
        self.processing[job * self.machines + machine_idx]
    }

    fn row(&self, job: usize) -> &[i64] {
        let start = job * self.machines;
        &self.processing[start..start + self.machines]
    }

    fn check_job(&self, job: usize) -> Result<(), BoundsError> {
        if job == SENTINEL || job > self.jobs {
            return Err(BoundsError::Job {
                job,
                jobs: self.jobs,
            });
        }
        Ok(())
    }
}

fn check_len(field: &'static str, expected: usize, found: usize) -> Result<(), DataError> {
    if expected != found {
        return Err(DataError::VectorLengthMismatch {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, job: usize, value: i64) -> Result<(), DataError> {
    if value < 0 {
        return Err(DataError::NegativeValue { field, job, value });
    }
    Ok(())
}
