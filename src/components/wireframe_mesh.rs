use gloo_console::error;
use log::{debug, info};
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::animation::point_cloud::{MeshStyle, PointCloud};
use crate::components::host::{self, FrameLoop, WindowListener};
use crate::error::{Result, SiteError};

pub enum MeshMsg {
    Frame,
    Resize,
}

#[derive(Properties, PartialEq)]
pub struct WireframeMeshProps {
    #[prop_or_default]
    pub class: Classes,
    /// Told when the mesh cannot draw; the rest of the page keeps working.
    #[prop_or_default]
    pub on_error: Callback<SiteError>,
}

struct Scene {
    canvas: HtmlCanvasElement,
    backend: CanvasBackend,
    cloud: PointCloud,
    _frames: FrameLoop,
    _resize: WindowListener,
}

/// The rotating point-cloud sphere behind the hero.
pub struct WireframeMesh {
    canvas: NodeRef,
    scene: Option<Scene>,
}

impl WireframeMesh {
    fn start(&self, ctx: &Context<Self>) -> Result<Scene> {
        let canvas = self
            .canvas
            .cast::<HtmlCanvasElement>()
            .ok_or(SiteError::SurfaceUnavailable)?;
        let (width, height) = host::window_size(&host::window()?)?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let backend =
            CanvasBackend::with_canvas_object(canvas.clone()).ok_or(SiteError::SurfaceUnavailable)?;
        let cloud = PointCloud::new(width, height, MeshStyle::default());
        let frames = FrameLoop::start(ctx.link().callback(|_| MeshMsg::Frame))?;
        let resize = WindowListener::new("resize", ctx.link().callback(|_| MeshMsg::Resize))?;

        info!("Wireframe mesh running at {}x{}", width, height);
        Ok(Scene { canvas, backend, cloud, _frames: frames, _resize: resize })
    }

    fn fail(&mut self, ctx: &Context<Self>, err: SiteError) {
        self.scene = None;
        error!(format!("Wireframe mesh stopped: {}", err));
        ctx.props().on_error.emit(err);
    }
}

impl Component for WireframeMesh {
    type Message = MeshMsg;
    type Properties = WireframeMeshProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { canvas: NodeRef::default(), scene: None }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(scene) = self.scene.as_mut() else {
            return false;
        };
        match msg {
            MeshMsg::Frame => {
                if let Err(err) = scene.cloud.render(&mut scene.backend) {
                    self.fail(ctx, SiteError::Dom(format!("{:?}", err)));
                }
            }
            MeshMsg::Resize => match host::window().and_then(|w| host::window_size(&w)) {
                Ok((width, height)) => {
                    debug!("Resizing wireframe mesh to {}x{}", width, height);
                    scene.canvas.set_width(width as u32);
                    scene.canvas.set_height(height as u32);
                    scene.cloud.resize(width, height);
                }
                Err(err) => self.fail(ctx, err),
            },
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <canvas ref={self.canvas.clone()} class={classes!("wireframe-mesh", ctx.props().class.clone())} />
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        match self.start(ctx) {
            Ok(scene) => self.scene = Some(scene),
            Err(err) => self.fail(ctx, err),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Cancels the pending frame and detaches the resize listener.
        self.scene = None;
    }
}
