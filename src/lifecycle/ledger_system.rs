use crate::allocation::AllocationService;
use crate::clients::{
    EquipmentClient, OrderProgressClient, PersonnelClient, ProcessOrderClient,
    ProcessTrackingClient, ProjectClient, ProjectShareClient,
};
use crate::clock::Clock;
use crate::config::Config;
use crate::http::AppState;
use crate::order_actor::OrderContext;
use crate::revenue::RevenueService;
use crate::{
    equipment_actor, order_actor, personnel_actor, progress_actor, project_actor, share_actor,
    tracking_actor,
};
use actor_framework::StorageError;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running ledger: one actor per store plus the services built on their clients.
///
/// ```ignore
/// let system = LedgerSystem::start(&Config::default(), Arc::new(SystemClock))?;
/// let order = system.orders.create_order(input).await?;
/// let report = system.allocation.report().await;
/// system.shutdown().await?;
/// ```
pub struct LedgerSystem {
    pub personnel: PersonnelClient,
    pub equipment: EquipmentClient,
    pub projects: ProjectClient,
    pub shares: ProjectShareClient,
    pub orders: ProcessOrderClient,
    pub tracking: ProcessTrackingClient,
    pub progress: OrderProgressClient,
    pub allocation: AllocationService,
    pub revenue: RevenueService,
    handles: Vec<JoinHandle<()>>,
}

impl LedgerSystem {
    /// Opens every store and spawns the actors. Must be called inside a Tokio runtime.
    ///
    /// Fails only if a configured store exists but cannot be read; nothing is spawned
    /// in that case.
    pub fn start(config: &Config, clock: Arc<dyn Clock>) -> Result<Self, StorageError> {
        // 1. Create actors (no dependencies yet)
        let (personnel_actor, personnel) = personnel_actor::new(config)?;
        let (equipment_actor, equipment) = equipment_actor::new(config)?;
        let (project_actor, projects) = project_actor::new(config)?;
        let (share_actor, shares) = share_actor::new(config)?;
        let (order_actor, orders) = order_actor::new(config)?;
        let (tracking_actor, tracking) = tracking_actor::new(config)?;
        let (progress_actor, progress) = progress_actor::new(config)?;

        let personnel = PersonnelClient::new(personnel);
        let equipment = EquipmentClient::new(equipment);
        let projects = ProjectClient::new(projects);
        let shares = ProjectShareClient::new(shares);
        let orders = ProcessOrderClient::new(orders);
        let tracking = ProcessTrackingClient::new(tracking);
        let progress = OrderProgressClient::new(progress);

        // 2. Start actors with their contexts injected
        let handles = vec![
            tokio::spawn(personnel_actor.run(shares.clone())),
            tokio::spawn(equipment_actor.run(shares.clone())),
            tokio::spawn(project_actor.run(())),
            tokio::spawn(share_actor.run(())),
            tokio::spawn(order_actor.run(OrderContext {
                tracking: tracking.clone(),
                clock: clock.clone(),
            })),
            tokio::spawn(tracking_actor.run(())),
            tokio::spawn(progress_actor.run(orders.clone())),
        ];
        info!(actors = handles.len(), persistent = config.data_dir.is_some(), "Ledger started");

        Ok(Self {
            allocation: AllocationService::new(
                personnel.clone(),
                equipment.clone(),
                shares.clone(),
                projects.clone(),
            ),
            revenue: RevenueService::new(orders.clone(), clock),
            personnel,
            equipment,
            projects,
            shares,
            orders,
            tracking,
            progress,
            handles,
        })
    }

    /// Handles for the HTTP layer. Drop every clone before calling [`shutdown`](Self::shutdown).
    pub fn state(&self) -> AppState {
        AppState {
            personnel: self.personnel.clone(),
            equipment: self.equipment.clone(),
            projects: self.projects.clone(),
            shares: self.shares.clone(),
            orders: self.orders.clone(),
            tracking: self.tracking.clone(),
            progress: self.progress.clone(),
            allocation: self.allocation.clone(),
            revenue: self.revenue.clone(),
        }
    }

    /// Drops every client and waits for all actor tasks to finish.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down ledger...");
        let Self {
            personnel,
            equipment,
            projects,
            shares,
            orders,
            tracking,
            progress,
            allocation,
            revenue,
            handles,
        } = self;
        drop((personnel, equipment, projects, shares, orders, tracking, progress));
        drop((allocation, revenue));

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }
        info!("Ledger shutdown complete.");
        Ok(())
    }
}
