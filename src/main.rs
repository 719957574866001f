//! Terminal demo: the arrow keys move the player, a few drifters bounce
//! around, and `q` or `Esc` quits.

#![deny(unused)]

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use legion::query::component;
use legion::world::SubWorld;
use legion::IntoQuery as _;
use legion::Resources;
use legion::Schedule;
use legion::World;

use sprite_actor::actor::Actor;
use sprite_actor::actor::Player;
use sprite_actor::asset::CachingLoader;
use sprite_actor::asset::FsLoader;
use sprite_actor::asset::Image;
use sprite_actor::asset::ImageLoader;
use sprite_actor::asset::MemoryLoader;
use sprite_actor::config::ActorDefaults;
use sprite_actor::config::Settings;
use sprite_actor::geo::Point;
use sprite_actor::geo::Rect;
use sprite_actor::gfx::Canvas;
use sprite_actor::gfx::Curses;
use sprite_actor::gfx::Scale;
use sprite_actor::gfx::texel::Texel;
use sprite_actor::input::KeyCode;
use sprite_actor::input::UserInput;
use sprite_actor::logging;
use sprite_actor::timing::FrameTimer;

/// Moves a sprite around the terminal with the arrow keys.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// Directory sprite paths are resolved against
  #[arg(long, default_value = ".")]
  assets: PathBuf,

  /// Logical-to-terminal scale, as `N` or `N/D`
  #[arg(long, default_value = "1/4")]
  scale: Scale,

  /// Target frames per second
  #[arg(long, default_value_t = 60)]
  fps: u32,

  /// Pixels per tick moved while an arrow key is held
  #[arg(long, default_value_t = ActorDefaults::SPEED)]
  speed: i64,

  /// Where to write the log, since the terminal is busy
  #[arg(long, default_value = "sprite-actor.log")]
  log_file: PathBuf,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,
}

/// Component: an actor that wanders on its own, bouncing off the edges.
struct Drifter;

/// The logical rectangle actors are kept inside.
struct Arena(Rect);

impl Arena {
  fn new(cols: usize, rows: usize, scale: Scale) -> Self {
    Arena(Rect::at(
      0,
      0,
      scale.unscale(cols as i64),
      scale.unscale(rows as i64),
    ))
  }

  fn center(&self) -> Point {
    let (ul, lr) = self.0.corners();
    Point::new((ul.x() + lr.x()) / 2, (ul.y() + lr.y()) / 2)
  }
}

/// How many drifters the player is currently touching.
struct Contacts(usize);

/// Picks the loader for the demo: real assets if they are there, generated
/// placeholders otherwise.
fn pick_loader(settings: &Settings) -> Box<dyn ImageLoader> {
  let fs = FsLoader::new(&settings.resource_root);
  let path = &settings.actors.image_path;
  if fs.resolve(path).is_file() {
    return Box::new(fs);
  }

  log::warn!(
    "{} not found; using a placeholder sprite",
    fs.resolve(path).display()
  );
  Box::new(
    MemoryLoader::new()
      .with(path.as_str(), Image::solid(32, 32, [80, 200, 120, 255])),
  )
}

#[legion::system]
fn poll_input(
  #[resource] window: &mut Curses,
  #[resource] input: &mut UserInput,
) {
  input.start_frame(window.keys(), Instant::now());
  if input.has_key(KeyCode::Char('q')) || input.has_key(KeyCode::Esc) {
    log::info!("quitting");
    window.die(0);
  }
}

#[legion::system(for_each)]
#[filter(component::<Player>())]
fn steer(actor: &mut Actor, #[resource] input: &UserInput) {
  for &e in input.events() {
    actor.handle(e);
  }
}

#[legion::system(for_each)]
fn act(actor: &mut Actor) {
  actor.act();
}

#[legion::system(for_each)]
#[filter(component::<Drifter>())]
fn bounce(actor: &mut Actor, #[resource] arena: &Arena) {
  let rect = match actor.sprite_rect() {
    Ok(r) => r,
    Err(_) => return,
  };
  let (ul, lr) = rect.corners();
  let (min, max) = arena.0.corners();

  if (ul.x() < min.x() && actor.dx() < 0) || (lr.x() > max.x() && actor.dx() > 0)
  {
    actor.set_dx(-actor.dx());
  }
  if (ul.y() < min.y() && actor.dy() < 0) || (lr.y() > max.y() && actor.dy() > 0)
  {
    actor.set_dy(-actor.dy());
  }
}

#[legion::system]
#[read_component(Actor)]
#[read_component(Player)]
#[read_component(Drifter)]
fn collide(world: &SubWorld, #[resource] contacts: &mut Contacts) {
  let players = <&Actor>::query()
    .filter(component::<Player>())
    .iter(world)
    .collect::<Vec<_>>();

  let mut count = 0;
  for drifter in <&Actor>::query()
    .filter(component::<Drifter>())
    .iter(world)
  {
    for player in &players {
      if let Ok(true) = player.intersects(drifter) {
        count += 1;
      }
    }
  }

  if count != contacts.0 {
    log::info!("player is touching {} drifter(s)", count);
    contacts.0 = count;
  }
}

#[legion::system]
#[read_component(Actor)]
fn render(
  world: &SubWorld,
  #[resource] window: &mut Curses,
  #[resource] canvas: &mut Canvas,
  #[resource] arena: &mut Arena,
  #[resource] settings: &Settings,
) {
  match window.dims() {
    Ok(dims) if dims != canvas.dims() => {
      log::debug!("terminal resized to {:?}", dims);
      canvas.resize(dims.0, dims.1);
      *arena = Arena::new(dims.0, dims.1, settings.scale);
    }
    Ok(_) => {}
    Err(e) => log::warn!("could not query terminal size: {}", e),
  }

  canvas.clear();
  for actor in <&Actor>::query().iter(world) {
    if let Err(e) = actor.draw(&mut *canvas, settings.scale) {
      log::debug!("skipping {:?}: {}", actor, e);
    }
  }

  if let Err(e) = canvas.present(window) {
    log::error!("failed to present frame: {}", e);
  }
}

#[legion::system]
fn pace(#[resource] timer: &mut FrameTimer) {
  timer.end_frame();
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  logging::init(args.verbose, Some(args.log_file.as_path()))?;

  let settings = Settings {
    resource_root: args.assets,
    scale: args.scale,
    target_fps: args.fps,
    actors: ActorDefaults {
      speed: args.speed,
      ..ActorDefaults::default()
    },
    ..Settings::default()
  };
  log::info!("starting with {:?}", settings);

  let loader = CachingLoader::new(pick_loader(&settings));

  let window = Curses::init()?;
  let (cols, rows) = window.dims()?;
  let arena = Arena::new(cols, rows, settings.scale);

  let mut world = World::default();
  let center = arena.center();
  world.push((
    Player,
    Actor::from_defaults(&loader, &settings.actors, center.x(), center.y()),
  ));

  let speed = settings.actors.speed;
  let drifters = [
    (Point::new(center.x() / 2, center.y() / 2), Point::new(speed, speed)),
    (Point::new(center.x() * 3 / 2, center.y() / 2), Point::new(-speed, speed)),
    (Point::new(center.x() / 2, center.y() * 3 / 2), Point::new(speed, -speed)),
  ];
  for &(pos, vel) in &drifters {
    let mut actor =
      Actor::from_defaults(&loader, &settings.actors, pos.x(), pos.y());
    actor.set_velocity(vel);
    world.push((Drifter, actor));
  }
  log::debug!("{} distinct sprite(s) loaded", loader.len());

  let mut resources = Resources::default();
  resources.insert(Canvas::new(cols, rows, Texel::empty()));
  resources.insert(window);
  resources.insert(UserInput::new(settings.release_delay));
  resources.insert(FrameTimer::new(settings.target_fps));
  resources.insert(arena);
  resources.insert(Contacts(0));
  resources.insert(settings);

  let mut schedule = Schedule::builder()
    .add_system(poll_input_system())
    .add_system(steer_system())
    .flush()
    .add_system(act_system())
    .add_system(bounce_system())
    .flush()
    .add_system(collide_system())
    .add_system(render_system())
    .add_system(pace_system())
    .build();

  loop {
    schedule.execute(&mut world, &mut resources);
  }
}
