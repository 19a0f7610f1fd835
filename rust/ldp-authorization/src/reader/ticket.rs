use async_trait::async_trait;
use ldp_common::Handler;

use crate::{AuthorizationError, Permission, PermissionReaderInput, PermissionSet, TICKET};

/// Grants exactly what a presented ticket grants, under the `"ticket"`
/// source.
///
/// The ticket only counts when it names the requested identifier exactly
/// and grants at least one mode. The resulting permission states every
/// [`AccessMode`](crate::AccessMode) explicitly. Without a matching ticket
/// the reader has no opinion and returns an empty set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketPermissionReader;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Handler<PermissionReaderInput> for TicketPermissionReader {
    type Output = PermissionSet;
    type Error = AuthorizationError;

    async fn handle(&self, input: PermissionReaderInput) -> Result<PermissionSet, Self::Error> {
        let Some(ticket) = input
            .credentials
            .ticket
            .as_ref()
            .filter(|ticket| ticket.resource == input.identifier && !ticket.modes.is_empty())
        else {
            tracing::trace!(identifier = %input.identifier, "No applicable ticket");
            return Ok(PermissionSet::default());
        };

        tracing::trace!(identifier = %input.identifier, modes = ?ticket.modes, "Ticket applies");

        Ok(PermissionSet::default().with_source(TICKET, Permission::from_modes(&ticket.modes)))
    }
}

#[cfg(test)]
mod tests {
    use ldp_common::Handler;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    use crate::{
        AccessMode, Credentials, Permission, PermissionReaderInput, PermissionSet, TICKET, Ticket,
        TicketPermissionReader,
    };

    fn with_ticket(ticket: Ticket, identifier: &str) -> PermissionReaderInput {
        PermissionReaderInput::new(Credentials::anonymous().with_ticket(ticket), identifier)
    }

    #[tokio::test]
    async fn it_states_every_mode_for_a_matching_ticket() -> TestResult {
        let input = with_ticket(Ticket::new("/a", [AccessMode::Read]), "/a");

        let set = TicketPermissionReader.handle_safe(input).await?;

        assert_eq!(
            set,
            PermissionSet::default().with_source(
                TICKET,
                Permission::default()
                    .with(AccessMode::Read, true)
                    .with(AccessMode::Write, false)
                    .with(AccessMode::Append, false)
                    .with(AccessMode::Create, false)
                    .with(AccessMode::Delete, false)
            )
        );
        Ok(())
    }

    #[tokio::test]
    async fn it_ignores_tickets_for_other_identifiers() -> TestResult {
        for requested in ["/b", "/a/", "/a/child", "", "/A"] {
            let input = with_ticket(Ticket::new("/a", AccessMode::ALL), requested);
            assert!(TicketPermissionReader.handle(input).await?.is_empty(), "{requested}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn it_ignores_tickets_without_modes() -> TestResult {
        let input = with_ticket(Ticket::new("/a", Vec::<AccessMode>::new()), "/a");

        assert!(TicketPermissionReader.handle(input).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn it_has_no_opinion_without_a_ticket() -> TestResult {
        let input = PermissionReaderInput::new(
            Credentials::anonymous().with_web_id("https://ex.org/alice#me"),
            "/a",
        );

        assert!(TicketPermissionReader.can_handle(&input).await.is_ok());
        assert_eq!(TicketPermissionReader.handle(input).await?, PermissionSet::default());
        Ok(())
    }

    #[tokio::test]
    async fn it_maps_every_ticket_mode_to_true() -> TestResult {
        let modes = [AccessMode::Write, AccessMode::Delete];
        let input = with_ticket(Ticket::new("/doc", modes), "/doc");

        let set = TicketPermissionReader.handle(input).await?;
        let permission = set.get(TICKET).expect("ticket source");

        for mode in AccessMode::ALL {
            assert_eq!(permission.get(mode), Some(modes.contains(&mode)), "{mode}");
        }
        Ok(())
    }
}
