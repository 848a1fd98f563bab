use gloo_timers::callback::Interval;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::animation::count_up::{CountUp, StatFigure, TICK_MS};
use crate::animation::visibility::{TriggerOptions, WatchId};
use crate::components::viewport;

pub enum CountUpMsg {
    Visible(bool),
    Tick,
}

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub target: u64,
    #[prop_or_default]
    pub suffix: String,
}

/// A number that counts up from zero the first time it is on screen.
pub struct CountUpNumber {
    node: NodeRef,
    counter: CountUp,
    watch: Option<WatchId>,
    ticker: Option<Interval>,
}

impl CountUpNumber {
    fn start(&mut self, ctx: &Context<Self>) {
        if self.ticker.is_some() || self.counter.is_finished() {
            return;
        }
        debug!("Counting up to {}", ctx.props().target);
        let link = ctx.link().clone();
        self.ticker = Some(Interval::new(TICK_MS, move || link.send_message(CountUpMsg::Tick)));
    }
}

impl Component for CountUpNumber {
    type Message = CountUpMsg;
    type Properties = CountUpProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            node: NodeRef::default(),
            counter: CountUp::new(props.target, props.suffix.clone()),
            watch: None,
            ticker: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CountUpMsg::Visible(true) => {
                self.start(ctx);
                false
            }
            CountUpMsg::Visible(false) => false,
            CountUpMsg::Tick => {
                let ticked = self.counter.tick().is_some();
                if self.counter.is_finished() {
                    // Dropping the interval clears it.
                    self.ticker = None;
                }
                ticked
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <span ref={self.node.clone()} class="count-up">{ self.counter.display() }</span>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(element) = self.node.cast::<Element>() else {
            return;
        };
        let on_change = ctx.link().callback(CountUpMsg::Visible);
        match viewport::watch(element, TriggerOptions::new(0, true), on_change) {
            Ok(id) => self.watch = Some(id),
            Err(err) => {
                warn!("Counting without viewport trigger: {}", err);
                self.start(ctx);
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.ticker = None;
        if let Some(id) = self.watch.take() {
            viewport::release(id);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatValueProps {
    pub value: f64,
    #[prop_or_default]
    pub suffix: String,
}

/// A hero statistic: counted when whole, printed as-is otherwise.
#[function_component(StatValue)]
pub fn stat_value(props: &StatValueProps) -> Html {
    match StatFigure::from_value(props.value, &props.suffix) {
        StatFigure::Counted { target, suffix } => html! { <CountUpNumber target={target} suffix={suffix} /> },
        StatFigure::Literal(text) => html! { <span class="count-up">{ text }</span> },
    }
}
