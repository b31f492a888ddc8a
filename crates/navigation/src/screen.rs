use std::{
    any::Any,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use actors::{
    actor::{Actor, SupervisionStrategy},
    actor_ref::{ActorRef, WeakActorRef},
    handler::{Handler, Message},
};
use async_trait::async_trait;
use model::{Coordinate, GeoPoint, Route};
use routing::RouteService;

use crate::{
    location::LocationProvider,
    location_store::LocationStore,
    presenter::RoutePresenter,
    surface::{Marker, MarkerIcon, RenderingSurface},
    LocationUnavailableError,
};

pub const USER_TITLE: &str = "You are here";
pub const HOME_TITLE: &str = "Saved home";
pub const SELECTED_TITLE: &str = "New point";
pub const USER_ZOOM: f64 = 16.0;

/// Everything a screen is built from. Produced again on every restart, so the
/// factory must hand out a fresh surface: overlays drawn by the failed screen
/// are not tracked by its replacement.
pub struct ScreenParts<S: RenderingSurface> {
    pub surface: S,
    pub store: LocationStore,
    pub routes: Arc<dyn RouteService>,
    pub locator: Arc<dyn LocationProvider>,
}

/// The map screen. All surface and store access happens inside its handlers,
/// so the actor's mailbox is the UI thread: background work (position lookup,
/// route requests) reports back by posting a message.
pub struct MapScreen<S: RenderingSurface> {
    myself: WeakActorRef<Self>,
    presenter: RoutePresenter<S>,
    store: LocationStore,
    routes: Arc<dyn RouteService>,
    locator: Arc<dyn LocationProvider>,
    user: Option<Coordinate>,
    selected: Option<GeoPoint>,
    /// Id of the newest route request; only its result is shown. Outlives
    /// restarts, so requests of a failed screen never match a newer one.
    generations: Arc<AtomicU64>,
}

impl<S: RenderingSurface> MapScreen<S> {
    pub fn spawn<F>(parts: F) -> ActorRef<Self>
    where
        F: 'static + Send + Fn() -> ScreenParts<S>,
    {
        let generations = Arc::new(AtomicU64::new(0));
        actors::run(move |myself| Self::new(myself, parts(), generations.clone()))
    }

    fn new(
        myself: WeakActorRef<Self>,
        parts: ScreenParts<S>,
        generations: Arc<AtomicU64>,
    ) -> Self {
        Self {
            myself,
            presenter: RoutePresenter::new(parts.surface),
            store: parts.store,
            routes: parts.routes,
            locator: parts.locator,
            user: None,
            selected: None,
            generations,
        }
    }

    async fn post<M>(myself: &WeakActorRef<Self>, message: M)
    where
        M: Message<Response = ()>,
        Self: Handler<M>,
    {
        let Some(screen) = myself.upgrade() else {
            log::debug!("Screen is gone, dropping result.");
            return;
        };
        if let Err(why) = screen.tell(message).await {
            log::error!("Could not post result to screen: {why}");
        }
    }

    fn request_route(&mut self, origin: Coordinate, destination: Coordinate) {
        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        let routes = self.routes.clone();
        let myself = self.myself.clone();

        tokio::spawn(async move {
            match routes.route(origin, destination).await {
                Ok(route) => Self::post(&myself, RouteArrived { generation, route }).await,
                Err(why) => log::error!("Route request failed: {why}"),
            }
        });
    }

    fn place_marker(&mut self, position: GeoPoint, icon: MarkerIcon, title: &'static str) {
        let surface = self.presenter.surface_mut();
        surface.remove_markers(&|marker: &Marker| marker.title == title);
        surface.add_marker(Marker::new(position, icon, title));
    }
}

impl<S: RenderingSurface> Actor for MapScreen<S> {
    fn on_fail(&mut self, _: Box<dyn Any + Send>) -> SupervisionStrategy {
        log::warn!("Map screen failed, rebuilding it.");
        SupervisionStrategy::Restart
    }
}

/// Result of the permission prompt.
#[derive(Debug, Clone)]
pub struct PermissionChanged {
    pub granted: bool,
}

impl Message for PermissionChanged {
    type Response = ();
}

#[derive(Debug, Clone)]
pub struct LocationAcquired(pub Coordinate);

impl Message for LocationAcquired {
    type Response = ();
}

#[derive(Debug, Clone)]
pub struct MapTapped(pub GeoPoint);

impl Message for MapTapped {
    type Response = ();
}

#[derive(Debug, Clone)]
pub struct CenterOnUser;

impl Message for CenterOnUser {
    type Response = ();
}

#[derive(Debug, Clone)]
pub struct RouteToSelected;

impl Message for RouteToSelected {
    type Response = ();
}

#[derive(Debug, Clone)]
pub struct SetHomeToSelected;

impl Message for SetHomeToSelected {
    type Response = ();
}

#[derive(Debug, Clone)]
pub struct RouteArrived {
    pub generation: u64,
    pub route: Route,
}

impl Message for RouteArrived {
    type Response = ();
}

#[derive(Debug, Clone)]
pub struct GetState;

impl Message for GetState {
    type Response = ScreenState;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub user: Option<Coordinate>,
    pub home: Option<Coordinate>,
    pub selected: Option<GeoPoint>,
    pub has_route: bool,
}

#[async_trait]
impl<S: RenderingSurface> Handler<PermissionChanged> for MapScreen<S> {
    async fn handle(&mut self, message: PermissionChanged) {
        if !message.granted {
            log::warn!("{}", LocationUnavailableError::PermissionDenied);
            return;
        }
        let locator = self.locator.clone();
        let myself = self.myself.clone();
        tokio::spawn(async move {
            match locator.current_position().await {
                Some(position) => Self::post(&myself, LocationAcquired(position)).await,
                None => log::warn!("{}", LocationUnavailableError::NoFix),
            }
        });
    }
}

#[async_trait]
impl<S: RenderingSurface> Handler<LocationAcquired> for MapScreen<S> {
    async fn handle(&mut self, LocationAcquired(position): LocationAcquired) {
        let point = GeoPoint::from(position);
        self.user = Some(position);

        let surface = self.presenter.surface_mut();
        surface.set_zoom(USER_ZOOM);
        surface.center_on(point);
        self.place_marker(point, MarkerIcon::Pin, USER_TITLE);

        let home = self.store.load();
        if let Some(home) = home {
            self.place_marker(home.into(), MarkerIcon::Home, HOME_TITLE);
        }
        self.presenter.surface_mut().invalidate();

        if let Some(home) = home {
            self.request_route(position, home);
        }
    }
}

#[async_trait]
impl<S: RenderingSurface> Handler<MapTapped> for MapScreen<S> {
    async fn handle(&mut self, MapTapped(point): MapTapped) {
        self.place_marker(point, MarkerIcon::Pin, SELECTED_TITLE);
        self.presenter.surface_mut().invalidate();
        self.selected = Some(point);
    }
}

#[async_trait]
impl<S: RenderingSurface> Handler<CenterOnUser> for MapScreen<S> {
    async fn handle(&mut self, _: CenterOnUser) {
        if let Some(user) = self.user {
            self.presenter.surface_mut().center_on(user.into());
        }
    }
}

#[async_trait]
impl<S: RenderingSurface> Handler<RouteToSelected> for MapScreen<S> {
    async fn handle(&mut self, _: RouteToSelected) {
        self.presenter.clear_route();
        let (Some(origin), Some(selected)) = (self.user, self.selected) else {
            log::debug!("Need both a position and a selected point to route.");
            return;
        };
        match Coordinate::try_from(selected) {
            Ok(destination) => self.request_route(origin, destination),
            Err(why) => log::warn!("Selected point can not be routed to: {why}"),
        }
    }
}

#[async_trait]
impl<S: RenderingSurface> Handler<SetHomeToSelected> for MapScreen<S> {
    async fn handle(&mut self, _: SetHomeToSelected) {
        self.presenter.clear_route();
        let Some(selected) = self.selected else {
            return;
        };
        let home = match Coordinate::try_from(selected) {
            Ok(home) => home,
            Err(why) => {
                log::warn!("Selected point can not be a home: {why}");
                return;
            }
        };

        self.store.save(home);
        self.place_marker(selected, MarkerIcon::Home, HOME_TITLE);
        self.presenter.surface_mut().invalidate();

        if let Some(origin) = self.user {
            self.request_route(origin, home);
        }
    }
}

#[async_trait]
impl<S: RenderingSurface> Handler<RouteArrived> for MapScreen<S> {
    async fn handle(&mut self, message: RouteArrived) {
        let latest = self.generations.load(Ordering::SeqCst);
        if message.generation != latest {
            log::debug!(
                "Discarding route {} (latest is {latest}).",
                message.generation
            );
            return;
        }
        log::info!(
            "Showing route with {} points ({:.2} km).",
            message.route.coordinates.len(),
            message.route.length_km()
        );
        self.presenter.show_route(&message.route.coordinates);
    }
}

#[async_trait]
impl<S: RenderingSurface> Handler<GetState> for MapScreen<S> {
    async fn handle(&mut self, _: GetState) -> ScreenState {
        ScreenState {
            user: self.user,
            home: self.store.load(),
            selected: self.selected,
            has_route: self.presenter.has_route(),
        }
    }
}
