/// Serialized execution of dashboard commands
///
/// UI callbacks push commands here instead of running them directly. A single
/// drain loop checks the latest `Dashboard` out of the shared cell, runs one
/// command to completion and stores the result back before starting the next,
/// so no command ever works on a stale copy.
use crate::api::BrowserApi;
use crate::dashboard::Dashboard;
use crate::error::Result;
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

type Run<A> = Box<dyn FnOnce(Dashboard, Rc<A>) -> LocalBoxFuture<'static, (Dashboard, Result<()>)>>;

struct Command<A> {
    name: &'static str,
    run: Run<A>,
}

pub struct CommandQueue<A> {
    api: Rc<A>,
    dashboard: Rc<RefCell<Dashboard>>,
    pending: RefCell<VecDeque<Command<A>>>,
    draining: Cell<bool>,
}

impl<A: BrowserApi + 'static> CommandQueue<A> {
    pub fn new(api: A, dashboard: Rc<RefCell<Dashboard>>) -> Self {
        Self {
            api: Rc::new(api),
            dashboard,
            pending: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
        }
    }

    pub fn dashboard(&self) -> &Rc<RefCell<Dashboard>> {
        &self.dashboard
    }

    /// True when nothing is running or waiting
    pub fn is_idle(&self) -> bool {
        !self.draining.get() && self.pending.borrow().is_empty()
    }

    pub fn is_queued(&self, name: &str) -> bool {
        self.pending.borrow().iter().any(|command| command.name == name)
    }

    /// Queue a command. Returns true when the caller has to start [`drain`](Self::drain).
    pub fn push<F>(&self, name: &'static str, run: F) -> bool
    where
        F: FnOnce(Dashboard, Rc<A>) -> LocalBoxFuture<'static, (Dashboard, Result<()>)> + 'static,
    {
        self.pending.borrow_mut().push_back(Command {
            name,
            run: Box::new(run),
        });
        !self.draining.replace(true)
    }

    /// Run queued commands in order until the queue is empty, reporting each result
    pub async fn drain(&self, report: impl Fn(&'static str, Result<()>)) {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(command) = next else {
                self.draining.set(false);
                return;
            };
            let current = self.dashboard.borrow().clone();
            let (updated, result) = (command.run)(current, Rc::clone(&self.api)).await;
            *self.dashboard.borrow_mut() = updated;
            if let Err(e) = &result {
                log::error!("{} failed: {}", command.name, e);
            }
            report(command.name, result);
        }
    }
}
