//! 查询服务
//!
//! 主循环是同步的；查询在 tokio 运行时上执行，结果经无界 channel 回传，
//! 由主循环每帧非阻塞地取出。

use std::sync::Arc;

use cocktail_lookup::CocktailLookup;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::model::{LookupCompletion, LookupRequest, StaleResponsePolicy};
use crate::update::Command;

/// 查询服务
pub struct SearchService {
    lookup: Arc<dyn CocktailLookup>,
    runtime: Handle,
    policy: StaleResponsePolicy,
    tx: UnboundedSender<LookupCompletion>,
    rx: UnboundedReceiver<LookupCompletion>,
    /// 最近一次发出的查询任务
    in_flight: Option<JoinHandle<()>>,
}

impl SearchService {
    pub fn new(
        lookup: Arc<dyn CocktailLookup>,
        runtime: Handle,
        policy: StaleResponsePolicy,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            lookup,
            runtime,
            policy,
            tx,
            rx,
            in_flight: None,
        }
    }

    /// 执行 Update 层返回的副作用
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Lookup(request) => self.spawn(request),
        }
    }

    fn spawn(&mut self, request: LookupRequest) {
        // LatestOnly 下旧任务的结果反正会被丢弃，直接中止
        if let Some(previous) = self.in_flight.take() {
            if self.policy == StaleResponsePolicy::LatestOnly && !previous.is_finished() {
                log::debug!("aborting superseded lookup before #{}", request.seq);
                previous.abort();
            }
        }

        log::debug!(
            "[{}] lookup #{} for {:?}",
            self.lookup.id(),
            request.seq,
            request.term
        );

        let lookup = Arc::clone(&self.lookup);
        let tx = self.tx.clone();
        let handle = self.runtime.spawn(async move {
            let result = lookup.search_by_name(&request.term).await;
            if tx.send(LookupCompletion { request, result }).is_err() {
                log::debug!("lookup finished after the UI loop stopped");
            }
        });
        self.in_flight = Some(handle);
    }

    /// 取出所有已完成的查询（不阻塞）
    pub fn drain(&mut self) -> Vec<LookupCompletion> {
        let mut completions = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            completions.push(completion);
        }
        completions
    }

    /// 等待下一个完成的查询
    #[cfg(test)]
    pub async fn recv(&mut self) -> Option<LookupCompletion> {
        self.rx.recv().await
    }
}
