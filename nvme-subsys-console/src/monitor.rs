//! Line-oriented monitor commands.

use crate::host::Host;
use nvme_subsys::api::hmp_inject_ana_state;
use nvme_subsys::{AnaState, Subsystem, DEVICE_DESCRIPTION};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const HELP: &str = "\
nvme_ana_inject_state <id> <grpid> <state>  inject ANA state (optimized|non-optimized|inaccessible|change)
info nvme-subsys                            show subsystems as JSON
help                                        show this text
quit                                        leave the monitor";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    InjectAnaState {
        id: String,
        grpid: u32,
        state: String,
    },
    InfoSubsystems,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Reply(String),
    Silent,
    Quit,
}

/// `Ok(None)` for a blank line.
pub(crate) fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let command = match words.as_slice() {
        [] => return Ok(None),
        ["nvme_ana_inject_state", id, grpid, state] => {
            let grpid = grpid
                .parse::<u32>()
                .map_err(|_| format!("invalid grpid {grpid}"))?;
            Command::InjectAnaState {
                id: id.to_string(),
                grpid,
                state: state.to_string(),
            }
        }
        ["nvme_ana_inject_state", ..] => {
            return Err("usage: nvme_ana_inject_state <id> <grpid> <state>".to_string())
        }
        ["info", "nvme-subsys"] => Command::InfoSubsystems,
        ["help"] => Command::Help,
        ["quit"] | ["q"] => Command::Quit,
        [other, ..] => return Err(format!("unknown command: '{other}'")),
    };
    Ok(Some(command))
}

pub(crate) fn execute(host: &mut Host, line: &str) -> Outcome {
    let command = match parse_command(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Outcome::Silent,
        Err(message) => return Outcome::Reply(message),
    };
    debug!(?command, "monitor command");

    match command {
        Command::InjectAnaState { id, grpid, state } => {
            Outcome::Reply(hmp_inject_ana_state(&mut host.devices, &id, grpid, &state))
        }
        Command::InfoSubsystems => Outcome::Reply(render_info(host)),
        Command::Help => Outcome::Reply(HELP.to_string()),
        Command::Quit => Outcome::Quit,
    }
}

/// Reads commands from stdin until EOF, `quit` or Ctrl-C.
pub(crate) async fn run(host: &mut Host) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match execute(host, &line) {
                    Outcome::Reply(reply) => println!("{reply}"),
                    Outcome::Silent => {}
                    Outcome::Quit => break,
                }
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SubsystemView<'a> {
    id: &'a str,
    description: &'static str,
    subnqn: &'a str,
    ana: bool,
    controllers: Vec<ControllerView<'a>>,
    namespaces: Vec<NamespaceView>,
    ana_groups: Vec<AnaGroupView>,
}

#[derive(Serialize)]
struct ControllerView<'a> {
    cntlid: u16,
    serial: Option<&'a str>,
    namespaces: Vec<u32>,
}

#[derive(Serialize)]
struct NamespaceView {
    nsid: u32,
    anagrpid: Option<u32>,
}

#[derive(Serialize)]
struct AnaGroupView {
    grpid: u32,
    state: &'static str,
    members: Vec<u32>,
}

fn subsystem_view<'a>(host: &'a Host, subsys: &'a Subsystem) -> SubsystemView<'a> {
    let controllers = subsys
        .controllers()
        .map(|(cntlid, _)| {
            let attached = host
                .controllers
                .iter()
                .find(|entry| entry.subsys == subsys.id() && entry.cntlid == cntlid);
            ControllerView {
                cntlid: cntlid.get(),
                serial: attached.map(|entry| entry.ctrl.serial()),
                namespaces: attached
                    .map(|entry| entry.ctrl.attached().iter().map(|nsid| nsid.get()).collect())
                    .unwrap_or_default(),
            }
        })
        .collect();

    let namespaces = subsys
        .namespaces()
        .map(|ns| NamespaceView {
            nsid: ns.nsid().get(),
            anagrpid: ns.ana_group().map(|grpid| grpid.get()),
        })
        .collect();

    // Untouched groups are left out to keep the listing short.
    let ana_groups = subsys
        .ana_groups()
        .filter(|group| group.nr_ns() > 0 || group.state() != AnaState::Optimized)
        .map(|group| AnaGroupView {
            grpid: group.id().get(),
            state: group.state().name(),
            members: group.members().iter().map(|nsid| nsid.get()).collect(),
        })
        .collect();

    SubsystemView {
        id: subsys.id(),
        description: DEVICE_DESCRIPTION,
        subnqn: subsys.subnqn().as_str(),
        ana: subsys.ana_enabled(),
        controllers,
        namespaces,
        ana_groups,
    }
}

fn render_info(host: &Host) -> String {
    let views: Vec<SubsystemView<'_>> = host
        .devices
        .iter()
        .map(|subsys| subsystem_view(host, subsys))
        .collect();
    serde_json::to_string_pretty(&views).unwrap_or_else(|err| format!("info unavailable: {err}"))
}
