//! Background capture worker
//!
//! A single dedicated thread that owns a pipeline and processes captures in
//! submission order. Callers hand it work explicitly and get a handle back;
//! the pipeline itself never hops threads.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::image_pipeline::capture::{CaptureLabel, CaptureReader};
use crate::image_pipeline::common::error::{ReportError, Result};
use crate::image_pipeline::conversions::{CaptureToReportPipeline, ReportOutcome};
use crate::image_pipeline::report::ReportWriter;

/// Captured bytes waiting to be analysed.
#[derive(Debug, Clone)]
pub struct CaptureJob {
    pub data: Vec<u8>,
    pub label: CaptureLabel,
}

struct QueuedJob {
    job: CaptureJob,
    result_sender: mpsc::Sender<Result<ReportOutcome>>,
}

/// Pending result of a submitted job.
pub struct JobHandle {
    receiver: mpsc::Receiver<Result<ReportOutcome>>,
}

impl JobHandle {
    /// Blocks until the worker has finished this job.
    pub fn wait(self) -> Result<ReportOutcome> {
        self.receiver
            .recv()
            .map_err(|_| ReportError::WorkerUnavailable)?
    }
}

pub struct CaptureWorker {
    task_sender: Option<mpsc::Sender<QueuedJob>>,
    thread: Option<JoinHandle<()>>,
}

impl CaptureWorker {
    pub fn spawn<R, W>(pipeline: CaptureToReportPipeline<R, W>) -> Result<Self>
    where
        R: CaptureReader + Send + 'static,
        W: ReportWriter + Send + 'static,
    {
        let (task_sender, task_receiver) = mpsc::channel::<QueuedJob>();

        let thread = thread::Builder::new()
            .name("capture-worker".to_string())
            .spawn(move || {
                while let Ok(task) = task_receiver.recv() {
                    let result = pipeline.process(&task.job.data, &task.job.label);
                    if let Err(e) = &result {
                        warn!(label = %task.job.label, "Capture failed: {}", e);
                    }
                    // The submitter may have dropped its handle; that is not an error.
                    let _ = task.result_sender.send(result);
                }
                debug!("Capture worker queue closed");
            })?;

        Ok(Self {
            task_sender: Some(task_sender),
            thread: Some(thread),
        })
    }

    pub fn submit(&self, job: CaptureJob) -> Result<JobHandle> {
        let (result_sender, receiver) = mpsc::channel();
        self.task_sender
            .as_ref()
            .ok_or(ReportError::WorkerUnavailable)?
            .send(QueuedJob { job, result_sender })
            .map_err(|_| ReportError::WorkerUnavailable)?;
        Ok(JobHandle { receiver })
    }

    /// Finishes the queued jobs, then stops the thread.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.task_sender.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Capture worker thread panicked");
            }
        }
    }
}

impl Drop for CaptureWorker {
    fn drop(&mut self) {
        self.stop();
    }
}
